//! Game state and core simulation types
//!
//! Everything the loop mutates lives in [`GameState`].

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball hangs at its start position until the first jump
    #[default]
    NotStarted,
    /// Gravity, walls and collisions are live
    Moving,
    /// A wall was hit; nothing moves anymore
    Over,
}

/// Axis-aligned rectangle the ball and walls live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::centered(WINDOW_WIDTH, WINDOW_HEIGHT, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

impl Playfield {
    /// A `width` x `height` playfield centred in a window
    pub fn centered(window_width: i32, window_height: i32, width: i32, height: i32) -> Self {
        Self {
            x: (window_width - width) / 2,
            y: (window_height - height) / 2,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// The player's ball. Only the vertical axis moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Fixed horizontal centre
    pub x: i32,
    /// Vertical centre
    pub y: f32,
    /// Vertical velocity (pixels/tick, positive is down)
    pub vel_y: f32,
    pub diameter: i32,
}

impl Ball {
    /// Ball at its starting spot: a quarter of the way in, a little below the top
    pub fn new(field: &Playfield) -> Self {
        let diameter = BALL_DIAMETER;
        Self {
            x: field.left() + field.width / 4,
            y: (field.top() + diameter / 2 + BALL_START_DROP) as f32,
            vel_y: 0.0,
            diameter,
        }
    }

    /// Radius in whole pixels (diameter / 2, rounded down)
    #[inline]
    pub fn radius(&self) -> i32 {
        self.diameter / 2
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x - self.radius()
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.radius()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.radius() as f32
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.radius() as f32
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y)
    }

    /// Set the upward impulse. Works mid-air, no cooldown.
    pub fn jump(&mut self) {
        self.vel_y = JUMP_SPEED;
    }

    /// Apply one tick of gravity then move
    pub fn integrate(&mut self) {
        self.vel_y += GRAVITY;
        self.y += self.vel_y;
    }

    /// Keep the ball inside the playfield. Returns true if it was clamped;
    /// a clamped ball stops dead.
    pub fn clamp_to(&mut self, field: &Playfield) -> bool {
        let r = self.radius() as f32;
        if self.y + r >= field.bottom() as f32 {
            self.y = field.bottom() as f32 - r;
            self.vel_y = 0.0;
            true
        } else if self.y - r <= field.top() as f32 {
            self.y = field.top() as f32 + r;
            self.vel_y = 0.0;
            true
        } else {
            false
        }
    }
}

/// A scrolling wall with a single opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    /// Left edge
    pub x: i32,
    /// Top of the opening
    pub gap_y: i32,
}

impl Wall {
    pub fn new(x: i32, gap_y: i32) -> Self {
        Self { x, gap_y }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + WALL_WIDTH
    }

    /// Bottom of the opening
    #[inline]
    pub fn gap_bottom(&self) -> i32 {
        self.gap_y + GAP_HEIGHT
    }

    #[inline]
    pub fn gap_center(&self) -> i32 {
        self.gap_y + GAP_HEIGHT / 2
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub field: Playfield,
    pub ball: Ball,
    /// Oldest (leftmost) wall at the front
    pub walls: VecDeque<Wall>,
    /// Simulated ticks since the first jump
    pub frame_count: u64,
    /// Simulated seconds since the first jump
    pub elapsed: f32,
    /// Walls created over the whole run
    pub walls_spawned: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Playfield::default())
    }
}

impl GameState {
    pub fn new(field: Playfield) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            ball: Ball::new(&field),
            field,
            walls: VecDeque::new(),
            frame_count: 0,
            elapsed: 0.0,
            walls_spawned: 0,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.phase == GamePhase::Moving
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// The wall closest to the ball (always the oldest)
    pub fn nearest_wall(&self) -> Option<&Wall> {
        self.walls.front()
    }

    /// Walls are sorted by ascending x
    pub fn walls_ordered(&self) -> bool {
        self.walls
            .iter()
            .zip(self.walls.iter().skip(1))
            .all(|(a, b)| a.x < b.x)
    }
}
