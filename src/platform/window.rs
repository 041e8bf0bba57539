//! Native window backend on raylib
//!
//! The window closes when [`RaylibWindow`] is dropped, so every exit path out
//! of the game loop releases it.

use std::panic::{self, AssertUnwindSafe};

use raylib::prelude::*;

use super::{Backend, Controls, Key};
use crate::error::{Error, Result};
use crate::renderer::shapes::{self, Shape};
use crate::renderer::Frame;

pub struct RaylibWindow {
    handle: RaylibHandle,
    thread: RaylibThread,
}

impl RaylibWindow {
    /// Open a titled window of the given size
    pub fn open(width: i32, height: i32, title: &str) -> Result<Self> {
        // raylib panics instead of returning when the window cannot be created
        let built = panic::catch_unwind(AssertUnwindSafe(|| {
            raylib::init().size(width, height).title(title).build()
        }));
        let (mut handle, thread) = built.map_err(|cause| {
            let reason = cause
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| cause.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "graphics subsystem unavailable".to_string());
            Error::WindowInit(reason)
        })?;

        if !handle.is_window_ready() {
            return Err(Error::WindowInit("window not ready".to_string()));
        }

        // Escape is handled by the game, not by raylib's close shortcut
        handle.set_exit_key(None);

        log::info!("Opened {width}x{height} window \"{title}\"");
        Ok(Self { handle, thread })
    }
}

/// Map a physical key to a game key; anything else is ignored
pub fn map_key(key: KeyboardKey) -> Option<Key> {
    match key {
        KeyboardKey::KEY_ESCAPE => Some(Key::Quit),
        KeyboardKey::KEY_ONE => Some(Key::Jump),
        _ => None,
    }
}

fn to_raylib(color: shapes::Color) -> Color {
    let [r, g, b, a] = shapes::to_rgba8(color);
    Color::new(r, g, b, a)
}

impl Backend for RaylibWindow {
    fn poll_controls(&mut self) -> Controls {
        let mut keys = Vec::new();
        while let Some(key) = self.handle.get_key_pressed() {
            keys.extend(map_key(key));
        }
        let mut controls = Controls::from_keys(keys);
        // Window close button
        controls.quit |= self.handle.window_should_close();
        controls
    }

    fn present(&mut self, frame: &Frame) {
        let mut d = self.handle.begin_drawing(&self.thread);
        d.clear_background(to_raylib(frame.clear));

        for shape in &frame.shapes {
            match shape {
                Shape::RectOutline {
                    min,
                    max,
                    thickness,
                    color,
                } => {
                    let rec = Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y);
                    d.draw_rectangle_lines_ex(rec, *thickness, to_raylib(*color));
                }
                Shape::FilledRect { min, max, color } => {
                    d.draw_rectangle(
                        min.x as i32,
                        min.y as i32,
                        (max.x - min.x) as i32,
                        (max.y - min.y) as i32,
                        to_raylib(*color),
                    );
                }
                Shape::FilledCircle {
                    center,
                    radius,
                    color,
                } => {
                    d.draw_circle(
                        center.x.round() as i32,
                        center.y.round() as i32,
                        *radius,
                        to_raylib(*color),
                    );
                }
                Shape::Text {
                    text,
                    origin,
                    size,
                    color,
                } => {
                    d.draw_text(
                        text,
                        origin.x as i32,
                        origin.y as i32,
                        *size as i32,
                        to_raylib(*color),
                    );
                }
            }
        }
    }
}
