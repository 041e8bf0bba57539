//! Platform abstraction layer
//!
//! Splits the outside world into two concerns the game loop drives separately:
//! - [`Backend`]: non-blocking input and frame presentation
//! - [`Pacer`]: waiting for the next tick boundary
//!
//! The raylib window implements the first for real play; the headless backend
//! and [`time::NoPacer`] let the loop run in tests.

pub mod headless;
pub mod time;
pub mod window;

use crate::renderer::Frame;
use crate::sim::TickInput;

pub use headless::HeadlessBackend;
pub use time::{FixedStepPacer, NoPacer};
pub use window::RaylibWindow;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Escape
    Quit,
    /// The `1` key
    Jump,
}

/// Controls gathered for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub quit: bool,
    pub jump: bool,
}

impl Controls {
    /// Fold a batch of key presses into one tick's controls
    pub fn from_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        keys.into_iter().fold(Self::default(), |mut c, key| {
            match key {
                Key::Quit => c.quit = true,
                Key::Jump => c.jump = true,
            }
            c
        })
    }

    /// The part the simulation sees
    pub fn tick_input(&self) -> TickInput {
        TickInput { jump: self.jump }
    }
}

/// Input and display side of a platform
pub trait Backend {
    /// Drain whatever input arrived since the last call. Never blocks.
    fn poll_controls(&mut self) -> Controls;

    /// Show a finished frame
    fn present(&mut self, frame: &Frame);
}

/// Real-time side of a platform
pub trait Pacer {
    /// Block until the next tick should start
    fn wait_for_next_tick(&mut self);
}
