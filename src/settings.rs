//! Game settings
//!
//! Loaded once before the game starts and treated as immutable for the session.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tick-rate table is empty")]
    EmptyTickRates,

    #[error("tick rate at index {0} is zero")]
    ZeroTickRate(usize),

    #[error("tick-rate index {index} is out of range (table has {len} entries)")]
    TickRateIndex { index: usize, len: usize },

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("{0} does not fit inside the field")]
    DoesNotFit(&'static str),
}

/// Who drives the right-hand paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OpponentMode {
    /// Reactive computer opponent
    #[default]
    Automated,
    /// Second human on the arrow keys
    Human,
}

impl OpponentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpponentMode::Automated => "automated",
            OpponentMode::Human => "human",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "automated" | "auto" | "cpu" => Some(OpponentMode::Automated),
            "human" | "2p" => Some(OpponentMode::Human),
            _ => None,
        }
    }
}

/// Ordered table of selectable tick rates (ticks per second)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRates {
    rates: Vec<u32>,
    selected: usize,
}

impl Default for TickRates {
    fn default() -> Self {
        Self {
            rates: DEFAULT_TICK_RATES.to_vec(),
            selected: DEFAULT_TICK_RATE_INDEX,
        }
    }
}

impl TickRates {
    /// Build a validated table with `selected` as the initial choice
    pub fn new(rates: Vec<u32>, selected: usize) -> Result<Self, SettingsError> {
        let table = Self { rates, selected };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.is_empty() {
            return Err(SettingsError::EmptyTickRates);
        }
        if let Some(i) = self.rates.iter().position(|&r| r == 0) {
            return Err(SettingsError::ZeroTickRate(i));
        }
        if self.selected >= self.rates.len() {
            return Err(SettingsError::TickRateIndex {
                index: self.selected,
                len: self.rates.len(),
            });
        }
        Ok(())
    }

    pub fn rates(&self) -> &[u32] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Index of the active rate
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Active rate in ticks per second
    pub fn current(&self) -> u32 {
        self.rates[self.selected]
    }

    /// Switch to the rate at `index`; out-of-range indices leave the selection alone
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.rates.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Wall-clock budget of one tick at the active rate
    pub fn tick_budget(&self) -> Duration {
        Duration::from_secs(1) / self.current()
    }
}

/// Ball settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Edge length of the (square) ball
    pub size: f32,
    pub color: Color,
    /// Per-tick velocity; only the signs ever change during play
    pub speed: Vec2,
    /// Serve position (top-left); defaults to the field center
    pub start: Option<Vec2>,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            size: BALL_SIZE,
            color: Color::WHITE,
            speed: Vec2::new(BALL_SPEED, BALL_SPEED),
            start: None,
        }
    }
}

/// Paddle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    pub color: Color,
    /// Largest displacement per tick when seeking a target
    pub max_speed: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: Color::WHITE,
            max_speed: PADDLE_MAX_SPEED,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub background: Color,

    // === Entities ===
    pub ball: BallSettings,
    /// Human-controlled paddle on the left edge
    pub left_paddle: PaddleSettings,
    /// Opponent paddle on the right edge
    pub right_paddle: PaddleSettings,
    pub opponent: OpponentMode,

    // === Pacing ===
    pub tick_rates: TickRates,
    /// Dead-time after each point
    pub score_delay_ms: u64,

    // === HUD ===
    pub score_color: Color,
    pub score_font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            background: Color::BLACK,

            ball: BallSettings::default(),
            left_paddle: PaddleSettings::default(),
            right_paddle: PaddleSettings::default(),
            opponent: OpponentMode::default(),

            tick_rates: TickRates::default(),
            score_delay_ms: SCORE_DELAY_MS,

            score_color: Color::WHITE,
            score_font_size: SCORE_FONT_SIZE,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("ball.size", self.ball.size)?;
        positive("|ball.speed.x|", self.ball.speed.x.abs())?;
        positive("|ball.speed.y|", self.ball.speed.y.abs())?;
        positive("score_font_size", self.score_font_size as f32)?;

        if self.ball.size > self.field_width || self.ball.size > self.field_height {
            return Err(SettingsError::DoesNotFit("ball"));
        }
        let start = self.ball_start();
        if !(0.0..=self.field_width - self.ball.size).contains(&start.x)
            || !(0.0..=self.field_height - self.ball.size).contains(&start.y)
        {
            return Err(SettingsError::DoesNotFit("ball.start"));
        }

        for (name, paddle) in [
            ("left_paddle", &self.left_paddle),
            ("right_paddle", &self.right_paddle),
        ] {
            positive(name, paddle.width)?;
            positive(name, paddle.height)?;
            positive(name, paddle.max_speed)?;
            if paddle.height > self.field_height || paddle.width > self.field_width {
                return Err(SettingsError::DoesNotFit(name));
            }
        }

        self.tick_rates.validate()
    }

    /// Serve position of the ball
    pub fn ball_start(&self) -> Vec2 {
        self.ball
            .start
            .unwrap_or_else(|| Vec2::new(self.field_width / 2.0, self.field_height / 2.0))
    }

    pub fn score_delay(&self) -> Duration {
        Duration::from_millis(self.score_delay_ms)
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), SettingsError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NonPositive(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_rates.current(), 120);
        assert_eq!(settings.ball_start(), Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let settings = Settings::from_json(r#"{ "field_width": 640, "opponent": "human" }"#)
            .expect("valid settings");
        assert_eq!(settings.field_width, 640.0);
        assert_eq!(settings.field_height, FIELD_HEIGHT);
        assert_eq!(settings.opponent, OpponentMode::Human);
        assert_eq!(settings.ball.size, BALL_SIZE);
    }

    #[test]
    fn test_from_json_rejects_out_of_range_tick_index() {
        let err = Settings::from_json(r#"{ "tick_rates": { "rates": [30, 60], "selected": 2 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::TickRateIndex { index: 2, len: 2 }
        ));
    }

    #[test]
    fn test_from_json_rejects_empty_and_zero_rates() {
        let err = Settings::from_json(r#"{ "tick_rates": { "rates": [], "selected": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::EmptyTickRates));

        let err = Settings::from_json(r#"{ "tick_rates": { "rates": [60, 0], "selected": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::ZeroTickRate(1)));
    }

    #[test]
    fn test_from_json_rejects_bad_geometry() {
        let err = Settings::from_json(r#"{ "left_paddle": { "height": 500 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::DoesNotFit("left_paddle")));

        let err = Settings::from_json(r#"{ "ball": { "speed": [0, 3] } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::NonPositive(_)));
    }

    #[test]
    fn test_default_serve_must_fit_small_field() {
        // Centered serve at x = 10 leaves no room for a 15 ball in a 20 wide field
        let err = Settings::from_json(r#"{ "field_width": 20 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::DoesNotFit("ball.start")));

        let settings = Settings::from_json(r#"{ "field_width": 20, "ball": { "start": [2, 100] } }"#)
            .expect("explicit serve fits");
        assert_eq!(settings.ball_start(), Vec2::new(2.0, 100.0));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_tick_rates_select() {
        let mut rates = TickRates::new(vec![30, 60, 120], 1).expect("valid table");
        assert_eq!(rates.current(), 60);
        assert_eq!(rates.rates(), &[30, 60, 120]);
        assert!(!rates.is_empty());
        assert!(rates.select(2));
        assert_eq!(rates.current(), 120);
        assert!(!rates.select(3));
        assert_eq!(rates.selected(), 2);
        assert_eq!(rates.tick_budget(), Duration::from_secs(1) / 120);
    }

    #[test]
    fn test_opponent_mode_from_str() {
        assert_eq!(OpponentMode::from_str("Human"), Some(OpponentMode::Human));
        assert_eq!(OpponentMode::from_str("cpu"), Some(OpponentMode::Automated));
        assert_eq!(OpponentMode::from_str("nobody"), None);
        assert_eq!(OpponentMode::Human.as_str(), "human");
    }
}
