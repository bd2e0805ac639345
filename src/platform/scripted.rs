//! Scripted input for tests and replays of hand-written sessions

use std::collections::{HashSet, VecDeque};

use super::{InputEvent, InputSource, Key};

/// Plays back queued event batches, one batch per `poll`.
///
/// Key-down/up events update the held-key set as they are delivered. Once the
/// script runs out every poll and wait yields `Quit`, so a loop driven by it
/// always terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
    held: HashSet<Key>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one batch of events for the next poll
    pub fn then(mut self, batch: impl IntoIterator<Item = InputEvent>) -> Self {
        self.batches.push_back(batch.into_iter().collect());
        self
    }

    /// Queue `n` empty polls
    pub fn idle(mut self, n: usize) -> Self {
        self.batches.extend((0..n).map(|_| Vec::new()));
        self
    }

    /// Start with `key` already held
    pub fn holding(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    /// Number of polls served so far
    pub fn polls(&self) -> u64 {
        self.polls
    }

    fn track(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                self.held.insert(key);
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&key);
            }
            _ => {}
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        let batch = self
            .batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]);
        for event in &batch {
            self.track(event);
        }
        batch
    }

    fn wait_event(&mut self) -> InputEvent {
        while let Some(mut batch) = self.batches.pop_front() {
            if batch.is_empty() {
                continue;
            }
            let event = batch.remove(0);
            if !batch.is_empty() {
                self.batches.push_front(batch);
            }
            self.track(&event);
            return event;
        }
        InputEvent::Quit
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
