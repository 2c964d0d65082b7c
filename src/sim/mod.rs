//! Simulation module
//!
//! All gameplay logic lives here and stays free of rendering or host
//! dependencies:
//! - One call to [`update`] is one frame
//! - Randomness only through an injected [`RandomSource`]
//! - Obstacles kept in spawn order

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use input::{Action, InputOutcome, action_for_code, handle_action};
pub use spawn::{OBSTACLE_CATALOG, RandomSource, maybe_spawn, spawn_obstacle};
pub use state::{GameState, Obstacle, ObstacleKind, Player};
pub use tick::{TickOutcome, update};
