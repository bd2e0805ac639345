//! Drawable shapes for the playfield entities

use super::Renderer;
use crate::Color;
use crate::sim::{Ball, Paddle, Rect};

/// How a rectangle is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Solid box
    Box,
    /// Ellipse inscribed in the box
    Ellipse,
}

/// Anything with a position on the field that can draw itself
pub trait Drawable {
    fn rect(&self) -> &Rect;

    fn color(&self) -> Color;

    fn shape(&self) -> Shape {
        Shape::Box
    }

    fn draw_on(&self, renderer: &mut dyn Renderer) {
        renderer.draw_rect(self.rect(), self.color(), self.shape());
    }
}

impl Drawable for Ball {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn color(&self) -> Color {
        self.color
    }

    fn shape(&self) -> Shape {
        Shape::Ellipse
    }
}

impl Drawable for Paddle {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn color(&self) -> Color {
        self.color
    }
}
