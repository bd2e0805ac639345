//! Attract-mode input
//!
//! Stands in for a player when no input device is attached: the pointer drifts
//! around the field with seeded jitter, and the session quits after a fixed
//! number of polls.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{InputEvent, InputSource, Key};

#[derive(Debug, Clone)]
pub struct DemoInput {
    rng: Pcg32,
    field_height: f32,
    pointer_y: f32,
    polls_left: u64,
}

impl DemoInput {
    pub fn new(seed: u64, field_height: f32, max_polls: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            field_height,
            pointer_y: field_height / 2.0,
            polls_left: max_polls,
        }
    }

    /// Polls remaining before the demo quits
    pub fn polls_left(&self) -> u64 {
        self.polls_left
    }
}

impl InputSource for DemoInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        if self.polls_left == 0 {
            return vec![InputEvent::Quit];
        }
        self.polls_left -= 1;

        // Move the pointer on roughly one poll in eight
        if !self.rng.random_bool(0.125) {
            return Vec::new();
        }
        let jitter: f32 = self.rng.random_range(-60.0..60.0);
        self.pointer_y = (self.pointer_y + jitter).clamp(0.0, self.field_height);
        vec![InputEvent::PointerMove {
            x: 0.0,
            y: self.pointer_y,
        }]
    }

    fn wait_event(&mut self) -> InputEvent {
        // Nobody to unpause the demo
        InputEvent::Quit
    }

    fn is_pressed(&self, _key: Key) -> bool {
        false
    }
}
