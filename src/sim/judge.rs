//! Scoring judge
//!
//! Evaluated once per tick after the ball has moved. Presentation of the score lives
//! in the renderer; this module only decides when a point is won.

use serde::{Deserialize, Serialize};

use super::collision::goal_scorer;
use super::geom::Field;
use super::state::{Ball, Score, Side};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringJudge {
    score: Score,
}

impl ScoringJudge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Award a point and re-serve if the ball left through a goal edge.
    ///
    /// Returns the side that scored.
    pub fn evaluate(&mut self, ball: &mut Ball, field: &Field) -> Option<Side> {
        let scorer = goal_scorer(&ball.rect, field)?;
        self.score.award(scorer);
        ball.reset();
        log::info!("Point to {} side, score {}", scorer.as_str(), self.score);
        Some(scorer)
    }

    /// Full restart: zero both counters and re-serve
    pub fn reset_match(&mut self, ball: &mut Ball) {
        self.score.reset();
        ball.reset();
    }

    /// Text shown at the top of the field
    pub fn score_text(&self) -> String {
        self.score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use glam::Vec2;

    fn ball() -> Ball {
        Ball::new(Vec2::new(400.0, 200.0), 15.0, Vec2::new(-3.0, 3.0), Color::WHITE)
    }

    #[test]
    fn test_ball_past_left_edge_scores_right() {
        let field = Field::new(800.0, 400.0);
        let mut judge = ScoringJudge::new();
        let mut ball = ball();
        ball.rect.pos = Vec2::new(-1.0, 50.0);

        assert_eq!(judge.evaluate(&mut ball, &field), Some(Side::Right));
        assert_eq!(judge.score(), Score { left: 0, right: 1 });
        assert_eq!(ball.rect.pos, ball.start);
        assert_eq!(ball.x_speed(), 3.0, "x_speed sign flipped by the re-serve");
    }

    #[test]
    fn test_ball_past_right_edge_scores_left() {
        let field = Field::new(800.0, 400.0);
        let mut judge = ScoringJudge::new();
        let mut ball = ball();
        ball.vel.x = 3.0;
        ball.rect.pos = Vec2::new(786.0, 50.0);

        assert_eq!(judge.evaluate(&mut ball, &field), Some(Side::Left));
        assert_eq!(judge.score(), Score { left: 1, right: 0 });
        assert_eq!(ball.x_speed(), -3.0);
    }

    #[test]
    fn test_ball_in_play_changes_nothing() {
        let field = Field::new(800.0, 400.0);
        let mut judge = ScoringJudge::new();
        let mut ball = ball();
        ball.rect.pos = Vec2::new(785.0, 50.0);

        assert_eq!(judge.evaluate(&mut ball, &field), None);
        assert_eq!(judge.score(), Score::default());
        assert_eq!(ball.rect.pos, Vec2::new(785.0, 50.0));
        assert_eq!(ball.x_speed(), -3.0);
    }

    #[test]
    fn test_reset_match() {
        let field = Field::new(800.0, 400.0);
        let mut judge = ScoringJudge::new();
        let mut ball = ball();
        for _ in 0..3 {
            ball.rect.pos = Vec2::new(-10.0, 0.0);
            judge.evaluate(&mut ball, &field);
        }
        ball.rect.pos = Vec2::new(123.0, 45.0);

        judge.reset_match(&mut ball);
        assert_eq!(judge.score(), Score::default());
        assert_eq!(ball.rect.pos, ball.start);
        assert_eq!(judge.score_text(), "0 : 0");
    }
}
