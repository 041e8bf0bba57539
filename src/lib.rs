//! Gap Dash - a one-button arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, walls, collisions, game state)
//! - `renderer`: Turns a game state into a draw list
//! - `platform`: Window, input and frame pacing backends
//! - `app`: The fixed-step game loop tying the three together
//! - `settings`: Runtime preferences loaded from JSON

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (50 Hz)
    pub const TIME_STEP_MS: u32 = 20;
    /// Telemetry reporting interval in milliseconds of simulated time
    pub const PRINT_INTERVAL_MS: u32 = 250;
    /// Ticks between telemetry lines
    pub const PRINT_INTERVAL_TICKS: u64 = (PRINT_INTERVAL_MS / TIME_STEP_MS) as u64;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_SPEED: f32 = -6.0;

    /// Window dimensions
    pub const WINDOW_WIDTH: i32 = 1200;
    pub const WINDOW_HEIGHT: i32 = 800;

    /// Playfield dimensions, centred in the window
    pub const PLAYFIELD_WIDTH: i32 = 1000;
    pub const PLAYFIELD_HEIGHT: i32 = 600;

    /// Ball size
    pub const BALL_DIAMETER: i32 = 30;
    /// Extra drop below the top edge for the starting position
    pub const BALL_START_DROP: i32 = 80;

    /// Wall defaults
    pub const WALL_WIDTH: i32 = 20;
    pub const GAP_HEIGHT: i32 = 120;
    /// Minimum travel before the next wall spawns
    pub const WALL_SPACING: f32 = 300.0;
    /// Leftward scroll per tick
    pub const WALL_SPEED: i32 = 2;
}
