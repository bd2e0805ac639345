//! Rendering interface
//!
//! The game never touches pixels itself. It issues clear/rect/text/present calls
//! against a `Renderer`, once per frame, in a fixed order.

pub mod headless;
pub mod shapes;

pub use headless::{DrawCommand, HeadlessRenderer};
pub use shapes::{Drawable, Shape};

use glam::Vec2;

use crate::Color;
use crate::sim::{Field, Rect};

/// Text label drawn over the frozen frame while paused
pub const PAUSED_LABEL: &str = "PAUSED";

/// Render collaborator
pub trait Renderer {
    /// Fill the whole surface
    fn clear(&mut self, background: Color);

    fn draw_rect(&mut self, rect: &Rect, color: Color, shape: Shape);

    /// Draw `text` centered on `center`
    fn draw_text(&mut self, text: &str, center: Vec2, color: Color, font_size: u32);

    /// Flush everything drawn since the last present to the display
    fn present(&mut self);

    /// Release display resources; called once when the loop terminates
    fn release(&mut self) {}
}

/// Per-frame presentation settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub background: Color,
    pub text_color: Color,
    pub font_size: u32,
}

/// Draw one full frame: clear, entities, score text, present
pub fn render_frame(
    renderer: &mut dyn Renderer,
    field: &Field,
    style: &FrameStyle,
    drawables: &[&dyn Drawable],
    score_text: &str,
) {
    renderer.clear(style.background);
    for drawable in drawables {
        drawable.draw_on(renderer);
    }
    renderer.draw_text(
        score_text,
        score_anchor(field, style.font_size),
        style.text_color,
        style.font_size,
    );
    renderer.present();
}

/// Overlay the pause label on whatever is on screen
pub fn render_paused(renderer: &mut dyn Renderer, field: &Field, style: &FrameStyle) {
    renderer.draw_text(
        PAUSED_LABEL,
        field.center(),
        style.text_color,
        style.font_size,
    );
    renderer.present();
}

/// Score text sits centered at the top of the field
pub fn score_anchor(field: &Field, font_size: u32) -> Vec2 {
    Vec2::new(field.width / 2.0, font_size as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, Paddle};

    fn style() -> FrameStyle {
        FrameStyle {
            background: Color::BLACK,
            text_color: Color::WHITE,
            font_size: 30,
        }
    }

    #[test]
    fn test_render_frame_order() {
        let field = Field::new(800.0, 400.0);
        let ball = Ball::new(Vec2::new(400.0, 200.0), 15.0, Vec2::new(3.0, 3.0), Color::WHITE);
        let paddle = Paddle::new(Rect::new(0.0, 200.0, 10.0, 80.0), 10.0, Color::WHITE);
        let mut renderer = HeadlessRenderer::new();

        render_frame(&mut renderer, &field, &style(), &[&ball, &paddle], "1 : 2");

        assert_eq!(renderer.frames(), 1);
        let frame = renderer.last_frame();
        assert_eq!(frame.len(), 4);
        assert_eq!(frame[0], DrawCommand::Clear(Color::BLACK));
        assert_eq!(
            frame[1],
            DrawCommand::Rect {
                rect: ball.rect,
                color: Color::WHITE,
                shape: Shape::Ellipse,
            }
        );
        assert!(matches!(frame[2], DrawCommand::Rect { shape: Shape::Box, .. }));
        assert_eq!(
            frame[3],
            DrawCommand::Text {
                text: "1 : 2".to_string(),
                center: Vec2::new(400.0, 30.0),
                color: Color::WHITE,
                font_size: 30,
            }
        );
    }

    #[test]
    fn test_render_paused_overlays_frozen_frame() {
        let field = Field::new(800.0, 400.0);
        let mut renderer = HeadlessRenderer::new();
        render_frame(&mut renderer, &field, &style(), &[], "0 : 0");
        render_paused(&mut renderer, &field, &style());

        assert_eq!(renderer.frames(), 2);
        let frame = renderer.last_frame();
        assert_eq!(frame.len(), 3, "clear + score + label");
        assert_eq!(renderer.last_text(), Some(PAUSED_LABEL));
    }
}
