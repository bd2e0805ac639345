//! Collision tests against the playfield edges
//!
//! Top and bottom edges are walls that reflect the ball. Left and right edges are
//! goals: crossing one scores a point instead of reflecting.

use super::geom::{Field, Rect};
use super::state::Side;

/// A reflecting wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Wall whose boundary the box has crossed, if any
pub fn wall_contact(rect: &Rect, field: &Field) -> Option<Wall> {
    if rect.top() < 0.0 {
        Some(Wall::Top)
    } else if rect.top() > field.max_top(rect.height()) {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Side that earns the point when the box has left through a goal edge
pub fn goal_scorer(rect: &Rect, field: &Field) -> Option<Side> {
    if rect.left() < 0.0 {
        Some(Side::Right)
    } else if rect.left() > field.max_left(rect.width()) {
        Some(Side::Left)
    } else {
        None
    }
}
