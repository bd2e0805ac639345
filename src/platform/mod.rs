//! Platform abstraction layer
//!
//! Narrow interfaces to the collaborators the game loop depends on:
//! - Input events and current key state
//! - Time and sleeping
//!
//! Window creation and device polling live behind these traits. The headless
//! implementations here drive tests and the native demo.

pub mod clock;
pub mod demo;
pub mod scripted;

pub use clock::{ManualClock, SystemClock};
pub use demo::DemoInput;
pub use scripted::ScriptedInput;

use std::time::{Duration, Instant};

/// Key identifiers the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    /// Pause toggle
    P,
    /// Match reset
    R,
    Q,
    Escape,
    /// Number row key; `Digit(1)` selects the first tick rate
    Digit(u8),
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed or process asked to stop
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Absolute pointer position in field coordinates
    PointerMove { x: f32, y: f32 },
}

/// Source of input events
pub trait InputSource {
    /// Drain pending events without blocking
    fn poll(&mut self) -> Vec<InputEvent>;

    /// Block until the next event arrives
    fn wait_event(&mut self) -> InputEvent;

    /// Whether `key` is currently held
    fn is_pressed(&self, key: Key) -> bool;
}

/// Time source for pacing
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&mut self, duration: Duration);

    /// Time elapsed since `earlier`, zero if the clock reads earlier than that
    fn since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}
