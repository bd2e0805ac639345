//! Game loop
//!
//! Owns the match and the collaborators. Each iteration while running: poll input,
//! advance one simulation tick, draw the frame, then sleep out the rest of the tick
//! budget. Everything happens on the caller's thread.

use std::time::Instant;

use crate::platform::{Clock, InputEvent, InputSource, Key};
use crate::renderer::{Drawable, FrameStyle, Renderer, render_frame, render_paused};
use crate::settings::{Settings, SettingsError, TickRates};
use crate::sim::{MatchState, Score, Step, TickInput, tick};

/// Loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Frame frozen; only quit and pause-toggle are honored
    Paused,
    Terminated,
}

/// Control action decoded from an input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    TogglePause,
    ResetMatch,
    /// Zero-based index into the tick-rate table
    SelectTickRate(usize),
    /// Pointer y for the human paddle
    PointerTarget(f32),
}

impl Command {
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape | Key::Q) => Some(Command::Quit),
            InputEvent::KeyDown(Key::P) => Some(Command::TogglePause),
            InputEvent::KeyDown(Key::R) => Some(Command::ResetMatch),
            InputEvent::KeyDown(Key::Digit(n)) => {
                Some(Command::SelectTickRate((n as usize).wrapping_sub(1)))
            }
            InputEvent::PointerMove { y, .. } => Some(Command::PointerTarget(y)),
            _ => None,
        }
    }
}

pub struct Game<R, I, C> {
    settings: Settings,
    state: MatchState,
    tick_rates: TickRates,
    loop_state: LoopState,
    style: FrameStyle,
    renderer: R,
    input: I,
    clock: C,
}

impl<R: Renderer, I: InputSource, C: Clock> Game<R, I, C> {
    pub fn new(settings: Settings, renderer: R, input: I, clock: C) -> Result<Self, SettingsError> {
        settings.validate()?;
        let style = FrameStyle {
            background: settings.background,
            text_color: settings.score_color,
            font_size: settings.score_font_size,
        };
        Ok(Self {
            state: MatchState::new(&settings),
            tick_rates: settings.tick_rates.clone(),
            loop_state: LoopState::Running,
            style,
            renderer,
            input,
            clock,
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn score(&self) -> Score {
        self.state.score()
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn tick_rates(&self) -> &TickRates {
        &self.tick_rates
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run until quit, then release the renderer. Returns the final score.
    pub fn run(&mut self) -> Score {
        log::info!(
            "Game starting: field {}x{}, {} Hz of {:?}, {} opponent",
            self.state.field.width,
            self.state.field.height,
            self.tick_rates.current(),
            self.tick_rates.rates(),
            self.settings.opponent.as_str()
        );

        while self.step() != LoopState::Terminated {}

        self.renderer.release();
        let score = self.score();
        log::info!(
            "Game over after {} ticks, final score {}",
            self.state.time_ticks,
            score
        );
        score
    }

    /// One loop iteration
    pub fn step(&mut self) -> LoopState {
        match self.loop_state {
            LoopState::Running => self.run_tick(),
            LoopState::Paused => {
                let event = self.input.wait_event();
                self.handle_event(event);
            }
            LoopState::Terminated => {}
        }
        self.loop_state
    }

    /// Route one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(command) = Command::from_event(&event) {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        match (self.loop_state, command) {
            (LoopState::Terminated, _) => {}
            (_, Command::Quit) => {
                log::info!("Quit requested");
                self.loop_state = LoopState::Terminated;
            }
            (LoopState::Running, Command::TogglePause) => {
                log::info!("Paused");
                self.loop_state = LoopState::Paused;
                render_paused(&mut self.renderer, &self.state.field, &self.style);
            }
            (LoopState::Paused, Command::TogglePause) => {
                log::info!("Resumed");
                self.loop_state = LoopState::Running;
            }
            (LoopState::Paused, _) => {}
            (LoopState::Running, Command::ResetMatch) => {
                self.state.reset_match();
                log::info!("Match reset");
            }
            (LoopState::Running, Command::SelectTickRate(index)) => {
                if self.tick_rates.select(index) {
                    log::info!("Tick rate set to {} Hz", self.tick_rates.current());
                } else {
                    log::warn!(
                        "No tick rate for key {} (table has {})",
                        index.wrapping_add(1),
                        self.tick_rates.len()
                    );
                }
            }
            (LoopState::Running, Command::PointerTarget(y)) => {
                self.state.left_control.set_target(y);
            }
        }
    }

    fn run_tick(&mut self) {
        let started = self.clock.now();

        if !self.dispatch_pending() {
            return;
        }

        let input = self.tick_input();
        let outcome = tick(&mut self.state, &input);
        self.draw();

        if outcome.scored.is_some() {
            self.settle();
        }
        if self.loop_state == LoopState::Running {
            self.pace(started);
        }
    }

    /// Drain pending input; false if the loop is no longer running
    fn dispatch_pending(&mut self) -> bool {
        for event in self.input.poll() {
            self.handle_event(event);
            if self.loop_state == LoopState::Terminated {
                return false;
            }
        }
        self.loop_state == LoopState::Running
    }

    fn tick_input(&self) -> TickInput {
        let right = if self.state.right_control.is_human() {
            Step::from_keys(
                self.input.is_pressed(Key::Up),
                self.input.is_pressed(Key::Down),
            )
        } else {
            Step::Hold
        };
        TickInput {
            left: Step::from_keys(self.input.is_pressed(Key::W), self.input.is_pressed(Key::S)),
            right,
        }
    }

    fn draw(&mut self) {
        let score_text = self.state.judge.score_text();
        let drawables: [&dyn Drawable; 3] = [&self.state.ball, &self.state.left, &self.state.right];
        render_frame(
            &mut self.renderer,
            &self.state.field,
            &self.style,
            &drawables,
            &score_text,
        );
    }

    /// Dead-time after a point. Sleeps in slices of one tick budget and keeps
    /// dispatching input between slices so quit and pause are not delayed.
    fn settle(&mut self) {
        let deadline = self.clock.now() + self.settings.score_delay();
        while self.loop_state == LoopState::Running {
            let remaining = deadline.saturating_duration_since(self.clock.now());
            if remaining.is_zero() {
                break;
            }
            self.clock.sleep(remaining.min(self.tick_rates.tick_budget()));
            if !self.dispatch_pending() {
                break;
            }
        }
    }

    /// Sleep out whatever is left of this tick's budget
    fn pace(&mut self, started: Instant) {
        let budget = self.tick_rates.tick_budget();
        let rest = budget.saturating_sub(self.clock.since(started));
        if !rest.is_zero() {
            self.clock.sleep(rest);
        }
    }
}
