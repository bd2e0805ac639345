//! Paddle controllers
//!
//! A human paddle follows either held direction keys (one unit per tick) or the last
//! pointer position (target seeking at up to `max_speed`). The automated opponent
//! seeks the ball's vertical center.

use super::geom::Field;
use super::state::{Ball, Paddle, Step};
use crate::settings::OpponentMode;

/// Input state for a human-driven paddle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HumanControl {
    /// Last pointer y; sought every tick until reached or replaced
    pub target: Option<f32>,
}

impl HumanControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-finite pointer positions are dropped and keep the previous target
    pub fn set_target(&mut self, y: f32) {
        if y.is_finite() {
            self.target = Some(y);
        } else {
            log::debug!("Ignoring non-finite pointer y={y}");
        }
    }

    /// Move the paddle for one tick. Held keys win over the pointer target and
    /// discard it, so releasing the keys leaves the paddle where it is.
    pub fn advance(&mut self, paddle: &mut Paddle, field: &Field, step: Step) -> bool {
        if step != Step::Hold {
            self.target = None;
            return paddle.move_by_step(step, field);
        }
        match self.target {
            Some(y) => paddle.move_toward(y, field),
            None => false,
        }
    }
}

/// Reactive computer opponent: aligns the paddle center with the ball center
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Opponent;

impl Opponent {
    /// Paddle top-edge y that centers the paddle on the ball
    pub fn target_for(ball: &Ball, paddle: &Paddle) -> f32 {
        ball.rect.center().y - paddle.rect.height() / 2.0
    }

    pub fn decide(&self, ball: &Ball, paddle: &mut Paddle, field: &Field) -> bool {
        paddle.move_toward(Self::target_for(ball, paddle), field)
    }
}

/// Who drives the opponent paddle
#[derive(Debug, Clone, PartialEq)]
pub enum Controller {
    Human(HumanControl),
    Automated(Opponent),
}

impl Controller {
    pub fn for_mode(mode: OpponentMode) -> Self {
        match mode {
            OpponentMode::Automated => Controller::Automated(Opponent),
            OpponentMode::Human => Controller::Human(HumanControl::new()),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Controller::Human(_))
    }

    /// Move the paddle for one tick; `step` is ignored by the automated opponent
    pub fn advance(&mut self, paddle: &mut Paddle, ball: &Ball, field: &Field, step: Step) -> bool {
        match self {
            Controller::Human(control) => control.advance(paddle, field, step),
            Controller::Automated(opponent) => opponent.decide(ball, paddle, field),
        }
    }
}
