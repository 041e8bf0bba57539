//! Gap Dash entry point
//!
//! Loads settings, opens the window and runs the game loop.

use std::process::ExitCode;

use gap_dash::app::Game;
use gap_dash::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use gap_dash::platform::{FixedStepPacer, RaylibWindow};
use gap_dash::sim::{clock_seed, seeded};
use gap_dash::{Result, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Gap Dash starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("gap-dash: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Wall seed: {seed}");

    let mut window = RaylibWindow::open(WINDOW_WIDTH, WINDOW_HEIGHT, &settings.window_title)?;
    let mut pacer = FixedStepPacer::default();
    let mut game = Game::new(seeded(seed)).telemetry(settings.telemetry);

    let summary = game.run(&mut window, &mut pacer, &mut std::io::stdout().lock());
    log::info!(
        "Exiting after {} ticks ({} simulated, {} walls, {:?})",
        summary.ticks,
        summary.frames,
        summary.walls_spawned,
        summary.phase
    );
    Ok(())
}
