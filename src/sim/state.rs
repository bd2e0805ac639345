//! Match state and core simulation types
//!
//! Entities are created once when the match starts and mutated in place every tick.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Wall, wall_contact};
use super::control::{Controller, HumanControl};
use super::geom::{Field, Rect};
use super::judge::ScoringJudge;
use crate::Color;
use crate::consts::STEP_UNIT;
use crate::settings::{PaddleSettings, Settings};

/// Field side, also used to name who scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// What the ball touched during one physics update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallContacts {
    /// Wall the ball was reflected off, if any
    pub wall: Option<Wall>,
    /// Number of paddles overlapping the ball (each one flipped `x_speed`)
    pub paddle_hits: u32,
}

/// The ball: constant-magnitude velocity, only signs ever flip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Per-tick displacement (`x_speed`, `y_speed`)
    pub vel: Vec2,
    /// Serve position restored by `reset`
    pub start: Vec2,
    pub color: Color,
}

impl Ball {
    pub fn new(start: Vec2, size: f32, vel: Vec2, color: Color) -> Self {
        Self {
            rect: Rect::new(start.x, start.y, size, size),
            vel,
            start,
            color,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.ball_start(),
            settings.ball.size,
            settings.ball.speed,
            settings.ball.color,
        )
    }

    #[inline]
    pub fn x_speed(&self) -> f32 {
        self.vel.x
    }

    #[inline]
    pub fn y_speed(&self) -> f32 {
        self.vel.y
    }

    /// Reverse vertical velocity
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Reverse horizontal velocity
    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Advance one tick, reflecting off the top/bottom walls and any overlapping paddle.
    ///
    /// The left/right edges are goals and are not checked here. Paddle overlaps get no
    /// positional correction, and every overlapping paddle flips `x_speed` on its own,
    /// so two simultaneous hits cancel out.
    pub fn update(&mut self, field: &Field, paddles: &[Rect]) -> BallContacts {
        self.rect.pos += self.vel;

        let mut contacts = BallContacts::default();

        if let Some(wall) = wall_contact(&self.rect, field) {
            self.rect.pos.y = match wall {
                Wall::Top => 0.0,
                Wall::Bottom => field.max_top(self.rect.height()),
            };
            self.bounce_y();
            contacts.wall = Some(wall);
        }

        for paddle in paddles {
            if self.rect.intersects(paddle) {
                self.bounce_x();
                contacts.paddle_hits += 1;
            }
        }

        contacts
    }

    /// Serve again: back to the start position, heading the other way
    pub fn reset(&mut self) {
        self.rect.pos = self.start;
        self.bounce_x();
    }
}

/// Discrete directional input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    Up,
    Down,
    #[default]
    Hold,
}

impl Step {
    /// Step for a pair of held direction keys; both or neither held means hold
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => Step::Up,
            (false, true) => Step::Down,
            _ => Step::Hold,
        }
    }

    fn delta(&self) -> f32 {
        match self {
            Step::Up => -STEP_UNIT,
            Step::Down => STEP_UNIT,
            Step::Hold => 0.0,
        }
    }
}

/// A paddle; only ever moves vertically
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Largest displacement per tick for target seeking
    pub max_speed: f32,
    pub color: Color,
}

impl Paddle {
    /// `max_speed` is a magnitude; its sign is ignored
    pub fn new(rect: Rect, max_speed: f32, color: Color) -> Self {
        Self {
            rect,
            max_speed: max_speed.abs(),
            color,
        }
    }

    /// Paddle pinned to the given side of the field, vertically centered
    pub fn for_side(side: Side, settings: &PaddleSettings, field: &Field) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => field.max_left(settings.width),
        };
        let y = field.max_top(settings.height) / 2.0;
        let rect = Rect::new(x, y, settings.width, settings.height);
        Self::new(rect, settings.max_speed, settings.color)
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.pos.y
    }

    /// Move toward `target_y` by at most `max_speed`.
    ///
    /// A move that would leave the field is dropped for this tick, not clamped.
    /// Returns whether the move was applied.
    pub fn move_toward(&mut self, target_y: f32, field: &Field) -> bool {
        let limit = self.max_speed.abs();
        let delta = (target_y - self.y()).clamp(-limit, limit);
        self.try_shift(delta, field)
    }

    /// Move one unit in the given direction under the same containment rule
    pub fn move_by_step(&mut self, step: Step, field: &Field) -> bool {
        self.try_shift(step.delta(), field)
    }

    fn try_shift(&mut self, delta: f32, field: &Field) -> bool {
        let y = self.y() + delta;
        // NaN fails the range check too
        if !(0.0..=field.max_top(self.rect.height())).contains(&y) {
            log::trace!("Rejected paddle move to y={y}");
            return false;
        }
        self.rect.pos.y = y;
        true
    }
}

/// Points per side; only ever goes up until an explicit reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.left, self.right)
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    pub field: Field,
    pub ball: Ball,
    /// Human paddle
    pub left: Paddle,
    /// Opponent paddle
    pub right: Paddle,
    pub left_control: HumanControl,
    pub right_control: Controller,
    pub judge: ScoringJudge,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl MatchState {
    pub fn new(settings: &Settings) -> Self {
        let field = Field::new(settings.field_width, settings.field_height);
        Self {
            field,
            ball: Ball::from_settings(settings),
            left: Paddle::for_side(Side::Left, &settings.left_paddle, &field),
            right: Paddle::for_side(Side::Right, &settings.right_paddle, &field),
            left_control: HumanControl::new(),
            right_control: Controller::for_mode(settings.opponent),
            judge: ScoringJudge::new(),
            time_ticks: 0,
        }
    }

    pub fn score(&self) -> Score {
        self.judge.score()
    }

    /// Zero the score and re-serve
    pub fn reset_match(&mut self) {
        self.judge.reset_match(&mut self.ball);
    }
}
