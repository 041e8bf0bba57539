//! Rendering module
//!
//! Builds a backend-independent draw list from the game state each tick.
//! The platform backend replays it onto the real frame buffer.

pub mod shapes;

use glam::Vec2;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::GameState;
pub use shapes::{Color, Shape};

/// Playfield border stroke
pub const BORDER_THICKNESS: f32 = 2.0;
/// "Game Over" font size
pub const OVERLAY_FONT_SIZE: f32 = 60.0;
pub const GAME_OVER_TEXT: &str = "Game Over";

/// One frame's worth of drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    /// Fill applied before any shape
    pub clear: Color,
    /// Painted in order, later shapes on top
    pub shapes: Vec<Shape>,
}

impl Frame {
    pub fn new(width: i32, height: i32, clear: Color) -> Self {
        Self {
            width,
            height,
            clear,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}

/// Draw the whole scene: border, ball, walls, then the game-over overlay
pub fn draw_scene(state: &GameState) -> Frame {
    let mut frame = Frame::new(WINDOW_WIDTH, WINDOW_HEIGHT, shapes::BLACK);
    let field = &state.field;
    let top = field.top() as f32;
    let bottom = field.bottom() as f32;

    frame.push(shapes::rect_outline(
        Vec2::new(field.left() as f32, top),
        Vec2::new(field.right() as f32, bottom),
        BORDER_THICKNESS,
        shapes::WHITE,
    ));

    frame.push(shapes::filled_circle(
        state.ball.center(),
        state.ball.radius() as f32,
        shapes::GREEN,
    ));

    for wall in &state.walls {
        let left = wall.x as f32;
        let right = wall.right() as f32;
        let upper = shapes::filled_rect(
            Vec2::new(left, top),
            Vec2::new(right, wall.gap_y as f32),
            shapes::BLUE,
        );
        let lower = shapes::filled_rect(
            Vec2::new(left, wall.gap_bottom() as f32),
            Vec2::new(right, bottom),
            shapes::BLUE,
        );
        frame.shapes.extend(upper.into_iter().chain(lower));
    }

    if state.is_over() {
        let center = Vec2::new(frame.width as f32 / 2.0, frame.height as f32 / 2.0);
        frame.push(shapes::centered_text(
            GAME_OVER_TEXT,
            center,
            OVERLAY_FONT_SIZE,
            shapes::RED,
        ));
    }

    frame
}
