//! The game loop
//!
//! Each pass: read input, stop on quit, tick the simulation, report,
//! draw, present, wait for the next tick.

use std::io::Write;

use crate::platform::{Backend, Pacer};
use crate::renderer;
use crate::sim::{GameEvent, GamePhase, GameState, GapSource, TickOutcome, tick};

/// Game instance holding all state
pub struct Game<G: GapSource> {
    pub state: GameState,
    gaps: G,
    telemetry: bool,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Loop iterations, including ones before the first jump
    pub ticks: u64,
    /// Simulated (moving) ticks
    pub frames: u64,
    pub walls_spawned: u64,
    pub phase: GamePhase,
}

impl<G: GapSource> Game<G> {
    pub fn new(gaps: G) -> Self {
        Self::with_state(GameState::default(), gaps)
    }

    pub fn with_state(state: GameState, gaps: G) -> Self {
        Self {
            state,
            gaps,
            telemetry: true,
        }
    }

    /// Turn telemetry lines on or off
    pub fn telemetry(mut self, enabled: bool) -> Self {
        self.telemetry = enabled;
        self
    }

    /// Run until the backend reports quit
    pub fn run(
        &mut self,
        backend: &mut impl Backend,
        pacer: &mut impl Pacer,
        out: &mut impl Write,
    ) -> RunSummary {
        let mut ticks = 0;
        loop {
            let controls = backend.poll_controls();
            if controls.quit {
                log::info!("Quit requested");
                break;
            }

            let outcome = tick(&mut self.state, &controls.tick_input(), &mut self.gaps);
            self.report(&outcome, out);

            backend.present(&renderer::draw_scene(&self.state));
            pacer.wait_for_next_tick();
            ticks += 1;
        }

        RunSummary {
            ticks,
            frames: self.state.frame_count,
            walls_spawned: self.state.walls_spawned,
            phase: self.state.phase,
        }
    }

    fn report(&self, outcome: &TickOutcome, out: &mut impl Write) {
        for event in &outcome.events {
            match event {
                GameEvent::Started => log::info!("Run started"),
                GameEvent::WallSpawned { gap_y } => log::debug!("Wall spawned, gap at {gap_y}"),
                GameEvent::WallRemoved => log::debug!("Wall left the field"),
                GameEvent::Collided { wall_x } => log::info!(
                    "Game over at {:.2} s: hit wall at x={wall_x}",
                    self.state.elapsed
                ),
            }
        }

        if !self.telemetry {
            return;
        }
        if let Some(telemetry) = outcome.telemetry {
            if let Err(e) = writeln!(out, "{telemetry}") {
                log::warn!("Failed to write telemetry: {e}");
            }
        }
    }
}
