//! Window-less backend
//!
//! Feeds a scripted key sequence to the loop and keeps what it presents.
//! Once the script runs out it reports a quit so runs always terminate.

use std::collections::VecDeque;

use super::{Backend, Controls, Key};
use crate::renderer::Frame;

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    script: VecDeque<Vec<Key>>,
    presented: usize,
    last_frame: Option<Frame>,
}

impl HeadlessBackend {
    /// One entry per tick: the keys pressed during that tick
    pub fn new(script: impl IntoIterator<Item = Vec<Key>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            presented: 0,
            last_frame: None,
        }
    }

    /// Press jump on the given ticks and idle for `ticks` in total
    pub fn jumping_on(ticks: usize, jump_ticks: &[usize]) -> Self {
        Self::new((0..ticks).map(|t| {
            if jump_ticks.contains(&t) {
                vec![Key::Jump]
            } else {
                Vec::new()
            }
        }))
    }

    pub fn frames_presented(&self) -> usize {
        self.presented
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }
}

impl Backend for HeadlessBackend {
    fn poll_controls(&mut self) -> Controls {
        match self.script.pop_front() {
            Some(keys) => Controls::from_keys(keys),
            None => Controls {
                quit: true,
                jump: false,
            },
        }
    }

    fn present(&mut self, frame: &Frame) {
        self.presented += 1;
        self.last_frame = Some(frame.clone());
    }
}
