//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

use super::Pacer;
use crate::consts::TIME_STEP_MS;

/// Sleeps so ticks start on a fixed real-time grid
#[derive(Debug)]
pub struct FixedStepPacer {
    step: Duration,
    next: Instant,
}

impl Default for FixedStepPacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(TIME_STEP_MS as u64))
    }
}

impl FixedStepPacer {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            next: Instant::now() + step,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }
}

impl Pacer for FixedStepPacer {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.step;
        } else {
            // Behind schedule: restart the grid, no catch-up burst
            self.next = now + self.step;
        }
    }
}

/// Never waits
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn wait_for_next_tick(&mut self) {}
}
