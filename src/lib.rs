//! Cactus Run - a side-scrolling jump-over-the-cactus arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, spawning, collisions, scoring, input)
//! - `render`: Drawing surface abstraction and the per-frame painter
//! - `driver`: Frame loop state machine shared by every host
//! - `viewport`: Visible play area derived from the host size
//! - `terminal_input`: Key bindings of the terminal host (native only)

pub mod driver;
pub mod render;
pub mod sim;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal_input;
pub mod viewport;

pub use driver::{Hud, LoopDriver, LoopPhase};
pub use viewport::Viewport;

/// Game configuration constants
pub mod consts {
    /// Obstacle speed at the start of a session (units per frame)
    pub const INITIAL_GAME_SPEED: f32 = 5.0;
    /// Speed added every live frame
    pub const GAME_SPEED_INCREMENT: f32 = 0.001;

    /// Viewport defaults
    pub const MAX_VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 250.0;
    /// Horizontal space left around the play area on narrow hosts
    pub const VIEW_SIDE_MARGIN: f32 = 40.0;
    /// Narrowest play area we will build, even on tiny hosts
    pub const MIN_VIEW_WIDTH: f32 = 200.0;
    /// Height of the strip below the ground line
    pub const GROUND_HEIGHT: f32 = 40.0;
    /// Ground line sits one unit below the ground reference
    pub const GROUND_LINE_OFFSET: f32 = 1.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const JUMP_STRENGTH: f32 = 13.0;
    pub const GRAVITY: f32 = 0.7;

    /// Obstacles are sunk into the ground by this much
    pub const OBSTACLE_SINK: f32 = 5.0;

    /// Frames per displayed score point
    pub const SCORE_DIVISOR: u64 = 10;
}
