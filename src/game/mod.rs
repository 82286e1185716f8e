//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Hosts drive it through `tick`, `request_direction` and `reset`.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{GameConfig, MAX_GRID_SIZE};
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
