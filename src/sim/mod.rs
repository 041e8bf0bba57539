//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness only through an injected [`GapSource`]
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_wall, first_hit, outside_gap, overlaps_horizontally};
pub use rng::{GapSource, clock_seed, seeded};
pub use state::{Ball, GamePhase, GameState, Playfield, Wall};
pub use tick::{GameEvent, Telemetry, TickInput, TickOutcome, tick};
