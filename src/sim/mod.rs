//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one fixed step; velocities are per tick
//! - Stable update order (ball, human paddle, opponent, judge)
//! - No rendering, input-device or timing dependencies

pub mod collision;
pub mod control;
pub mod geom;
pub mod judge;
pub mod state;
pub mod tick;

pub use collision::{Wall, goal_scorer, wall_contact};
pub use control::{Controller, HumanControl, Opponent};
pub use geom::{Field, Rect};
pub use judge::ScoringJudge;
pub use state::{Ball, BallContacts, MatchState, Paddle, Score, Side, Step};
pub use tick::{TickInput, TickOutcome, tick};
