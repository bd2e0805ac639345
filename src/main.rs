//! Simple Pong entry point
//!
//! Runs a headless attract-mode session: the demo input plays the left paddle,
//! the configured opponent plays the right one, and frames go to the recording
//! renderer. Pass a settings JSON path as the first argument to override defaults.
//! `SIMPLE_PONG_OPPONENT` (`automated` / `human`) overrides the opponent mode.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use simple_pong::Game;
use simple_pong::platform::{DemoInput, SystemClock};
use simple_pong::renderer::HeadlessRenderer;
use simple_pong::settings::{OpponentMode, Settings};

/// Demo length in polls unless overridden by `SIMPLE_PONG_TICKS`
const DEFAULT_DEMO_TICKS: u64 = 1000;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Simple Pong (headless) starting...");

    let mut settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).with_context(|| format!("loading settings from {path}"))?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    if let Ok(value) = std::env::var("SIMPLE_PONG_OPPONENT") {
        settings.opponent = OpponentMode::from_str(&value)
            .with_context(|| format!("SIMPLE_PONG_OPPONENT is not an opponent mode: {value}"))?;
    }

    let ticks = match std::env::var("SIMPLE_PONG_TICKS") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("SIMPLE_PONG_TICKS is not a number: {value}"))?,
        Err(_) => DEFAULT_DEMO_TICKS,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Demo input seeded with {seed}, running {ticks} ticks");

    let input = DemoInput::new(seed, settings.field_height, ticks);
    let mut game = Game::new(settings, HeadlessRenderer::new(), input, SystemClock)
        .context("invalid settings")?;
    let score = game.run();

    println!(
        "Final score {score} vs {} opponent ({} frames)",
        game.settings().opponent.as_str(),
        game.renderer().frames()
    );
    Ok(())
}
