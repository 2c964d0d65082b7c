//! Frame loop state machine
//!
//! Hosts own the actual scheduling (`requestAnimationFrame`, a sleep loop);
//! the driver tells them whether another frame is wanted and keeps the
//! simulation, the painter and the HUD in step.

use crate::consts::SCORE_DIVISOR;
use crate::render::{self, DrawSurface};
use crate::sim::{self, Action, GameState, InputOutcome, RandomSource, TickOutcome};
use crate::viewport::Viewport;

/// Score readout and game-over message provided by the host
pub trait Hud {
    /// Show the displayed (already divided) score
    fn set_score(&mut self, score: u32);
    fn set_game_over_visible(&mut self, visible: bool);
}

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Frames are being scheduled
    Running,
    /// Session over, message shown, no frames scheduled
    StoppedDisplay,
}

/// Owns the session and its random source; sole mutator of both
pub struct LoopDriver<R> {
    state: GameState,
    rng: R,
    phase: LoopPhase,
    /// A frame has been requested from the host and not yet run
    frame_pending: bool,
}

impl<R: RandomSource> LoopDriver<R> {
    pub fn new(viewport: Viewport, mut rng: R) -> Self {
        let state = GameState::new(viewport, &mut rng);
        Self {
            state,
            rng,
            phase: LoopPhase::Running,
            frame_pending: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Enter the running state. Returns true if the host must schedule a
    /// frame.
    pub fn start(&mut self, hud: &mut impl Hud) -> bool {
        self.phase = LoopPhase::Running;
        hud.set_game_over_visible(false);
        hud.set_score(self.state.display_score());
        log::info!("Session started ({} wide)", self.state.viewport.width);
        self.request_frame()
    }

    /// Run one scheduled frame. Returns true if the host should schedule the
    /// next one.
    pub fn frame<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        hud: &mut impl Hud,
    ) -> Result<bool, S::Error> {
        self.frame_pending = false;

        if self.state.game_over {
            if self.phase == LoopPhase::Running {
                self.phase = LoopPhase::StoppedDisplay;
                hud.set_game_over_visible(true);
                self.log_final_state();
            }
            return Ok(false);
        }

        if sim::update(&mut self.state, &mut self.rng) == TickOutcome::Collided {
            log::debug!("Collision on frame {}", self.state.score);
        }
        hud.set_score(self.state.display_score());
        render::draw(&self.state, surface)?;

        self.frame_pending = true;
        Ok(true)
    }

    /// Paint the current state without advancing it, e.g. after the host
    /// surface was resized while no frame is scheduled
    pub fn repaint<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(&self.state, surface)
    }

    /// The host could not schedule the frame it was asked for
    pub fn abandon_frame(&mut self) {
        self.frame_pending = false;
    }

    /// Feed a host input. Returns true if the host must schedule a frame.
    pub fn handle_action(&mut self, action: Action, hud: &mut impl Hud) -> bool {
        match sim::handle_action(&mut self.state, action, &mut self.rng) {
            InputOutcome::Restarted => self.start(hud),
            // A live session with nothing scheduled has lost its loop
            // (failed frame or request); any input picks it up again
            InputOutcome::Jumped | InputOutcome::Ignored => {
                if self.phase == LoopPhase::Running && self.request_frame() {
                    log::warn!("Resuming stalled frame loop");
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Mark a frame as requested; false if one is already on its way
    fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    fn log_final_state(&self) {
        log::info!(
            "Game over: score {} ({} frames, speed {:.3})",
            self.state.score / SCORE_DIVISOR,
            self.state.score,
            self.state.speed
        );
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&self.state) {
                Ok(json) => log::debug!("Final frame: {}", json),
                Err(e) => log::warn!("Could not serialize final frame: {}", e),
            }
        }
    }
}
