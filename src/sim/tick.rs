//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one tick. Velocities are per tick, so the
//! selected tick rate only changes pacing, never physics.

use super::collision::Wall;
use super::state::{MatchState, Side, Step};

/// Directional input sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held keys for the human paddle
    pub left: Step,
    /// Held keys for the opponent paddle (second human only)
    pub right: Step,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub wall: Option<Wall>,
    pub paddle_hits: u32,
    /// Side that won a point this tick
    pub scored: Option<Side>,
}

/// Advance the match by one tick: ball, human paddle, opponent, then the judge
pub fn tick(state: &mut MatchState, input: &TickInput) -> TickOutcome {
    state.time_ticks += 1;

    let paddles = [state.left.rect, state.right.rect];
    let contacts = state.ball.update(&state.field, &paddles);

    state
        .left_control
        .advance(&mut state.left, &state.field, input.left);
    state
        .right_control
        .advance(&mut state.right, &state.ball, &state.field, input.right);

    let scored = state.judge.evaluate(&mut state.ball, &state.field);

    TickOutcome {
        wall: contacts.wall,
        paddle_hits: contacts.paddle_hits,
        scored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{OpponentMode, Settings};
    use crate::sim::state::Score;
    use glam::Vec2;

    /// Paddles parked where the ball can never reach them
    fn open_field_state() -> MatchState {
        let mut settings = Settings::default();
        settings.opponent = OpponentMode::Human;
        let mut state = MatchState::new(&settings);
        state.left.rect.pos.x = -1000.0;
        state.right.rect.pos.x = 2000.0;
        state
    }

    #[test]
    fn test_tick_counts_and_moves_ball() {
        let mut state = open_field_state();
        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.ball.rect.pos, Vec2::new(403.0, 203.0));
        assert_eq!(outcome, TickOutcome::default());
    }

    #[test]
    fn test_tick_applies_human_steps() {
        let mut state = open_field_state();
        let input = TickInput {
            left: Step::Up,
            right: Step::Down,
        };
        tick(&mut state, &input);
        assert_eq!(state.left.y(), 159.0);
        assert_eq!(state.right.y(), 161.0);
    }

    #[test]
    fn test_automated_opponent_tracks_ball() {
        let mut state = MatchState::new(&Settings::default());
        let before = state.right.y();
        tick(&mut state, &TickInput::default());
        // Ball center 210.5 after one tick, target 170.5, clamped to +10
        assert_eq!(state.right.y(), before + 10.0);
    }

    #[test]
    fn test_tick_reports_goal() {
        let mut state = open_field_state();
        state.ball.rect.pos = Vec2::new(784.0, 100.0);
        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.scored, Some(Side::Left));
        assert_eq!(state.score(), Score { left: 1, right: 0 });
        assert_eq!(state.ball.rect.pos, state.ball.start);
        assert_eq!(state.ball.x_speed(), -3.0);
    }

    #[test]
    fn test_open_field_scenario() {
        // 800x400 field, ball 15, speed (3, 3), no paddle contact for 1000 ticks
        let mut state = open_field_state();
        let mut goals = 0;
        for _ in 0..1000 {
            let before = state.score();
            let outcome = tick(&mut state, &TickInput::default());
            let top = state.ball.rect.top();
            assert!((0.0..=385.0).contains(&top), "ball left the field vertically: {top}");
            assert_eq!(outcome.paddle_hits, 0);
            if let Some(side) = outcome.scored {
                goals += 1;
                let after = state.score();
                assert_eq!(after.left + after.right, before.left + before.right + 1);
                assert_eq!(state.ball.rect.pos, state.ball.start, "scored from {side:?}");
            } else {
                let left = state.ball.rect.left();
                assert!((0.0..=785.0).contains(&left), "ball out without a goal: {left}");
            }
        }
        assert!(goals > 0);
        // Serves alternate direction, so both sides score
        assert!(state.score().left > 0 && state.score().right > 0);
    }
}
