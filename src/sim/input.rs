//! Player input
//!
//! Hosts translate their raw events (keys, touches) into [`Action`]s; this
//! module decides what an action means for the current session.

use super::spawn::RandomSource;
use super::state::GameState;

/// Discrete input signal from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump key or touch
    Jump,
    /// Any other key
    Other,
}

/// Map a browser `KeyboardEvent.code` to an action
pub fn action_for_code(code: &str) -> Action {
    match code {
        "Space" | "ArrowUp" => Action::Jump,
        _ => Action::Other,
    }
}

/// What an action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Jumped,
    /// The finished session was replaced by a fresh one
    Restarted,
    Ignored,
}

/// Apply a host action to the session
pub fn handle_action(
    state: &mut GameState,
    action: Action,
    rng: &mut impl RandomSource,
) -> InputOutcome {
    if state.game_over {
        // Any action restarts a finished session
        state.initialize(rng);
        log::info!("Restarted after {:?}", action);
        return InputOutcome::Restarted;
    }

    match action {
        Action::Jump if state.player.jump() => InputOutcome::Jumped,
        _ => InputOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;
    use crate::consts::*;
    use crate::sim::spawn::testing::Scripted;

    fn session() -> (GameState, Scripted) {
        let mut rng = Scripted::repeat(0.0);
        let state = GameState::new(Viewport::default(), &mut rng);
        (state, rng)
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(action_for_code("Space"), Action::Jump);
        assert_eq!(action_for_code("ArrowUp"), Action::Jump);
        assert_eq!(action_for_code("KeyA"), Action::Other);
        assert_eq!(action_for_code("ArrowDown"), Action::Other);
        // Codes are case-sensitive
        assert_eq!(action_for_code("space"), Action::Other);
    }

    #[test]
    fn test_jump_from_ground() {
        let (mut state, mut rng) = session();
        assert_eq!(
            handle_action(&mut state, Action::Jump, &mut rng),
            InputOutcome::Jumped
        );
        assert!(state.player.airborne);
        assert_eq!(state.player.vy, -JUMP_STRENGTH);
    }

    #[test]
    fn test_no_air_jump() {
        let (mut state, mut rng) = session();
        handle_action(&mut state, Action::Jump, &mut rng);
        state.player.vy = -4.0;

        assert_eq!(
            handle_action(&mut state, Action::Jump, &mut rng),
            InputOutcome::Ignored
        );
        assert_eq!(state.player.vy, -4.0);
    }

    #[test]
    fn test_other_key_ignored_while_alive() {
        let (mut state, mut rng) = session();
        state.score = 50;
        assert_eq!(
            handle_action(&mut state, Action::Other, &mut rng),
            InputOutcome::Ignored
        );
        assert!(!state.player.airborne);
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_any_action_restarts_after_game_over() {
        for action in [Action::Jump, Action::Other] {
            let (mut state, mut rng) = session();
            state.game_over = true;
            state.score = 777;
            state.speed = 7.0;

            assert_eq!(
                handle_action(&mut state, action, &mut rng),
                InputOutcome::Restarted
            );
            assert!(!state.game_over);
            assert_eq!(state.score, 0);
            assert_eq!(state.speed, INITIAL_GAME_SPEED);
            assert_eq!(state.obstacles.len(), 1);
            // Restart does not also count as a jump
            assert!(!state.player.airborne);
        }
    }
}
