//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; the loop driver owns
//! it and hands it to each stage by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::spawn::{RandomSource, spawn_obstacle};
use crate::Viewport;
use crate::consts::*;

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (x never changes)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    /// Where the player's bottom edge rests when grounded
    pub ground_y: f32,
    /// A jump is in progress
    pub airborne: bool,
}

impl Player {
    /// Fresh grounded player for the given play area
    pub fn new(viewport: &Viewport) -> Self {
        let ground_y = viewport.ground_y();
        Self {
            pos: Vec2::new(PLAYER_X, ground_y - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vy: 0.0,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            ground_y,
            airborne: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Start a jump. Returns false if one is already in progress.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.vy = -self.jump_strength;
        true
    }

    /// Apply one frame of gravity, landing on the ground if we reach it
    pub fn integrate(&mut self) {
        self.vy += self.gravity;
        self.pos.y += self.vy;

        if self.pos.y + self.size.y > self.ground_y {
            self.pos.y = self.ground_y - self.size.y;
            self.vy = 0.0;
            self.airborne = false;
        }
    }
}

/// Obstacle shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// One small cactus
    Small,
    /// Two small cacti side by side
    Medium,
    /// One large cactus
    Large,
}

impl ObstacleKind {
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Small => Vec2::new(20.0, 40.0),
            ObstacleKind::Medium => Vec2::new(40.0, 40.0),
            ObstacleKind::Large => Vec2::new(60.0, 40.0),
        }
    }
}

/// A cactus scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// New obstacle just past the right edge, sunk slightly into the ground
    pub fn new(kind: ObstacleKind, viewport: &Viewport) -> Self {
        let size = kind.size();
        Self {
            kind,
            pos: Vec2::new(
                viewport.width,
                viewport.ground_y() - size.y + OBSTACLE_SINK,
            ),
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Fully past the left edge of the screen
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub player: Player,
    /// Active obstacles in spawn order (also left-to-right order)
    pub obstacles: Vec<Obstacle>,
    /// Live frames survived this session
    pub score: u64,
    /// Current obstacle speed (units per frame)
    pub speed: f32,
    pub game_over: bool,
}

impl GameState {
    /// Create a new session for the given play area
    pub fn new(viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let mut state = Self {
            viewport,
            player: Player::new(&viewport),
            obstacles: Vec::new(),
            score: 0,
            speed: INITIAL_GAME_SPEED,
            game_over: false,
        };
        state.initialize(rng);
        state
    }

    /// Reset every session field and seed the first obstacle
    pub fn initialize(&mut self, rng: &mut impl RandomSource) {
        self.player = Player::new(&self.viewport);
        self.obstacles.clear();
        self.score = 0;
        self.speed = INITIAL_GAME_SPEED;
        self.game_over = false;

        spawn_obstacle(self, rng);
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        u32::try_from(self.score / SCORE_DIVISOR).unwrap_or(u32::MAX)
    }
}
