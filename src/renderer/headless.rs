//! Headless renderer
//!
//! Records draw calls instead of rasterizing them. Used by the native demo and tests.

use glam::Vec2;

use super::{Renderer, Shape};
use crate::Color;
use crate::sim::Rect;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        rect: Rect,
        color: Color,
        shape: Shape,
    },
    Text {
        text: String,
        center: Vec2,
        color: Color,
        font_size: u32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    /// Commands since the last clear
    pending: Vec<DrawCommand>,
    /// Snapshot taken at the last present
    presented: Vec<DrawCommand>,
    frames: u64,
    released: bool,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of presents so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// What was on screen at the last present
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Last text drawn in the presented frame
    pub fn last_text(&self) -> Option<&str> {
        self.presented.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Renderer for HeadlessRenderer {
    fn clear(&mut self, background: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(background));
    }

    fn draw_rect(&mut self, rect: &Rect, color: Color, shape: Shape) {
        self.pending.push(DrawCommand::Rect {
            rect: *rect,
            color,
            shape,
        });
    }

    fn draw_text(&mut self, text: &str, center: Vec2, color: Color, font_size: u32) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            color,
            font_size,
        });
    }

    fn present(&mut self) {
        self.frames += 1;
        self.presented.clone_from(&self.pending);
        log::trace!(
            "Frame {} presented ({} draw calls)",
            self.frames,
            self.presented.len()
        );
    }

    fn release(&mut self) {
        self.released = true;
        log::debug!("Headless renderer released after {} frames", self.frames);
    }
}
