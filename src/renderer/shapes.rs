//! Shape primitives for 2D drawing
//!
//! Backends only need four operations: outlined rectangle, filled rectangle,
//! filled circle and text.

use glam::Vec2;

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];

/// Convert a color to 8-bit channels
pub fn to_rgba8(color: Color) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// A single draw command in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Unfilled rectangle from `min` to `max` with the given stroke
    RectOutline {
        min: Vec2,
        max: Vec2,
        thickness: f32,
        color: Color,
    },
    /// Filled rectangle from `min` to `max`
    FilledRect { min: Vec2, max: Vec2, color: Color },
    FilledCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text with its top-left corner at `origin`
    Text {
        text: String,
        origin: Vec2,
        size: f32,
        color: Color,
    },
}

/// Rectangle outline between two corners
pub fn rect_outline(min: Vec2, max: Vec2, thickness: f32, color: Color) -> Shape {
    Shape::RectOutline {
        min,
        max,
        thickness,
        color,
    }
}

/// Filled rectangle between two corners. Returns None if it has no area.
pub fn filled_rect(min: Vec2, max: Vec2, color: Color) -> Option<Shape> {
    (max.x > min.x && max.y > min.y).then_some(Shape::FilledRect { min, max, color })
}

pub fn filled_circle(center: Vec2, radius: f32, color: Color) -> Shape {
    Shape::FilledCircle {
        center,
        radius,
        color,
    }
}

/// Approximate advance of one glyph as a fraction of the font size
const GLYPH_ADVANCE: f32 = 0.55;

/// Estimated width of a line of text
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_ADVANCE
}

/// Text centred on a point
pub fn centered_text(text: &str, center: Vec2, size: f32, color: Color) -> Shape {
    let origin = Vec2::new(center.x - text_width(text, size) / 2.0, center.y - size / 2.0);
    Shape::Text {
        text: text.to_string(),
        origin,
        size,
        color,
    }
}
