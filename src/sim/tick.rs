//! Per-frame simulation tick
//!
//! Advances the session by exactly one frame. There is no variable timestep:
//! every quantity here (gravity, speed) is expressed per frame.

use super::spawn::{RandomSource, maybe_spawn};
use super::state::GameState;
use crate::consts::*;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session continues
    Running,
    /// The player hit an obstacle this frame
    Collided,
    /// The session was already over; nothing moved
    Frozen,
}

/// Advance the game state by one frame
pub fn update(state: &mut GameState, rng: &mut impl RandomSource) -> TickOutcome {
    if state.game_over {
        return TickOutcome::Frozen;
    }

    state.player.integrate();

    let player_rect = state.player.rect();
    let speed = state.speed;

    // Newest first
    for obstacle in state.obstacles.iter_mut().rev() {
        obstacle.pos.x -= speed;

        if player_rect.overlaps(&obstacle.rect()) && !state.game_over {
            state.game_over = true;
            log::info!(
                "Hit {:?} at x={:.1} - final score {}",
                obstacle.kind,
                obstacle.pos.x,
                state.score / SCORE_DIVISOR
            );
        }
    }

    state.obstacles.retain(|o| !o.is_off_screen());

    if state.game_over {
        return TickOutcome::Collided;
    }

    maybe_spawn(state, rng);

    state.score += 1;
    state.speed += GAME_SPEED_INCREMENT;

    TickOutcome::Running
}
