//! Simple Pong - a two-paddle ball-bounce arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddle control, scoring)
//! - `game`: Fixed-tick game loop, input routing, pause and pacing
//! - `renderer`: Render collaborator interface and headless recorder
//! - `platform`: Input and clock collaborators
//! - `settings`: Session configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Command, Game, LoopState};
pub use settings::{OpponentMode, Settings, SettingsError, TickRates};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Ball defaults (per-tick speed)
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 3.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MAX_SPEED: f32 = 10.0;
    /// Displacement of one directional-key step
    pub const STEP_UNIT: f32 = 1.0;

    /// Selectable tick rates (Hz), picked with the number keys
    pub const DEFAULT_TICK_RATES: [u32; 4] = [30, 60, 120, 240];
    pub const DEFAULT_TICK_RATE_INDEX: usize = 2;

    /// Dead-time after a point
    pub const SCORE_DELAY_MS: u64 = 500;
    pub const SCORE_FONT_SIZE: u32 = 30;
}

/// RGB color tag; only the renderer looks at it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}
