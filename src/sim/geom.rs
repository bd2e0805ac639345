//! Axis-aligned geometry for the playfield and its entities
//!
//! Screen convention: origin at the top-left corner, x grows right, y grows down.
//! A rectangle's `pos` is its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box with a fixed size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Center point of the box
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Playfield bounds, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest top-edge y that keeps a box of `height` fully inside the field
    #[inline]
    pub fn max_top(&self, height: f32) -> f32 {
        self.height - height
    }

    /// Largest left-edge x that keeps a box of `width` fully inside the field
    #[inline]
    pub fn max_left(&self, width: f32) -> f32 {
        self.width - width
    }

    /// True if the box's vertical extent lies within `[0, height]`
    pub fn contains_vertically(&self, rect: &Rect) -> bool {
        rect.top() >= 0.0 && rect.top() <= self.max_top(rect.height())
    }

    /// Center of the field
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
