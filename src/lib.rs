//! Snake Gate - a terminal Snake game used as an engagement gate
//!
//! This library provides:
//! - Core game logic (game module)
//! - A fixed-interval tick driver (driver module)
//! - The score threshold that unlocks a redemption code (gate module)
//! - Terminal input mapping and TUI rendering (input, render modules)
//! - The interactive play mode (modes module)

pub mod driver;
pub mod game;
pub mod gate;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
