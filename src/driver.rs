//! Fixed-interval tick driver
//!
//! Owns the cadence at which the engine advances. Ticks never overlap: a
//! late tick is delayed rather than followed by a burst of catch-up ticks.
//! Hosts race `wait` against their other event sources; dropping the wait
//! future cancels the pending tick without touching the engine.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

pub struct TickDriver {
    interval: Interval,
    ticks: u64,
}

impl TickDriver {
    /// The first tick fires one full period after creation
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self { interval, ticks: 0 }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Number of ticks delivered so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Wait for the next tick slot. Cancel-safe, so it can sit in a `select!`.
    pub async fn wait(&mut self) {
        self.interval.tick().await;
        self.ticks += 1;
    }

    /// Start counting periods from now, e.g. after a restart
    pub fn restart(&mut self) {
        self.interval.reset();
    }
}
