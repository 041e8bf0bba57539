//! Fixed timestep simulation tick
//!
//! Advances the game by one step. Order within a tick matters and is fixed:
//! jump, physics, spawn, scroll, collide, telemetry, clock.

use std::fmt;

use super::collision::first_hit;
use super::rng::GapSource;
use super::state::{GamePhase, GameState, Wall};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key pressed this tick
    pub jump: bool,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First jump; the run is live
    Started,
    WallSpawned { gap_y: i32 },
    WallRemoved,
    /// Ball hit a wall; the run is over
    Collided { wall_x: i32 },
}

/// Periodic diagnostic snapshot, all heights relative to the playfield top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    /// Simulated seconds
    pub elapsed: f32,
    pub frame: u64,
    /// From the ball's right edge to the nearest wall's left edge
    pub wall_distance: f32,
    pub ball_height: f32,
    pub ball_speed: f32,
    /// Centre of the nearest wall's opening
    pub gap_center_height: f32,
}

impl Telemetry {
    fn capture(state: &GameState, wall: &Wall) -> Self {
        let baseline = (state.field.top() + state.ball.radius()) as f32;
        Self {
            elapsed: state.elapsed,
            frame: state.frame_count,
            wall_distance: (wall.x - state.ball.right()) as f32,
            ball_height: state.ball.y - baseline,
            ball_speed: state.ball.vel_y,
            gap_center_height: wall.gap_center() as f32 - baseline,
        }
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time: {:.2} s, frame: {:.2}, wall distance: {:.2} px, ball height: {:.2} px, \
             ball speed: {:.2} px/tick, gap center height: {:.2} px",
            self.elapsed,
            self.frame as f64,
            self.wall_distance,
            self.ball_height,
            self.ball_speed,
            self.gap_center_height,
        )
    }
}

/// What a tick produced besides the state change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    pub telemetry: Option<Telemetry>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, gaps: &mut impl GapSource) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if input.jump && !state.is_over() {
        if state.phase == GamePhase::NotStarted {
            state.phase = GamePhase::Moving;
            outcome.events.push(GameEvent::Started);
        }
        state.ball.jump();
    }

    // Nothing moves before the first jump or after a crash
    if !state.is_moving() {
        return outcome;
    }

    state.ball.integrate();
    state.ball.clamp_to(&state.field);

    if let Some(wall) = spawn_wall(state, gaps) {
        outcome.events.push(GameEvent::WallSpawned { gap_y: wall.gap_y });
    }

    if advance_walls(state) {
        outcome.events.push(GameEvent::WallRemoved);
    }

    if let Some(wall) = first_hit(&state.ball, &state.walls).copied() {
        outcome.events.push(GameEvent::Collided { wall_x: wall.x });
        state.phase = GamePhase::Over;
    }

    if state.frame_count % PRINT_INTERVAL_TICKS == 0 {
        outcome.telemetry = state
            .nearest_wall()
            .map(|wall| Telemetry::capture(state, wall));
    }

    state.elapsed += TIME_STEP_MS as f32 / 1000.0;
    state.frame_count += 1;

    outcome
}

/// Append a wall at the right edge once the newest one has scrolled far enough
fn spawn_wall(state: &mut GameState, gaps: &mut impl GapSource) -> Option<Wall> {
    let field = state.field;
    let due = match state.walls.back() {
        None => true,
        Some(newest) => (newest.x as f32) < field.right() as f32 - WALL_SPACING,
    };
    if !due {
        return None;
    }

    let span = field.height - GAP_HEIGHT;
    let wall = Wall::new(field.right(), field.top() + gaps.next_offset(span));
    state.walls.push_back(wall);
    state.walls_spawned += 1;
    Some(wall)
}

/// Scroll every wall left and drop the oldest once it is fully off the field.
/// Returns true if a wall was removed.
fn advance_walls(state: &mut GameState) -> bool {
    for wall in state.walls.iter_mut() {
        wall.x -= WALL_SPEED;
    }
    debug_assert!(state.walls_ordered(), "walls out of order: {:?}", state.walls);

    let expired = state
        .walls
        .front()
        .is_some_and(|oldest| oldest.right() < state.field.left());
    if expired {
        state.walls.pop_front();
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;
    use crate::sim::state::Playfield;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Hands out a fixed list of offsets, then repeats the last one
    struct ScriptedGaps {
        offsets: VecDeque<i32>,
        last: i32,
        spans: Vec<i32>,
    }

    impl ScriptedGaps {
        fn new(offsets: &[i32]) -> Self {
            Self {
                offsets: offsets.iter().copied().collect(),
                last: 0,
                spans: Vec::new(),
            }
        }
    }

    impl GapSource for ScriptedGaps {
        fn next_offset(&mut self, span: i32) -> i32 {
            self.spans.push(span);
            if let Some(v) = self.offsets.pop_front() {
                self.last = v;
            }
            self.last
        }
    }

    const JUMP: TickInput = TickInput { jump: true };
    const IDLE: TickInput = TickInput { jump: false };

    #[test]
    fn test_idle_state_never_changes() {
        let mut state = GameState::default();
        let initial = state.clone();
        let mut gaps = ScriptedGaps::new(&[10]);

        for _ in 0..500 {
            let outcome = tick(&mut state, &IDLE, &mut gaps);
            assert_eq!(outcome, TickOutcome::default());
        }
        assert_eq!(state, initial);
        assert!(gaps.spans.is_empty());
    }

    #[test]
    fn test_first_jump_starts_and_rises() {
        let mut state = GameState::default();
        let start_y = state.ball.y;
        let mut gaps = ScriptedGaps::new(&[0]);

        let outcome = tick(&mut state, &JUMP, &mut gaps);

        assert_eq!(state.phase, GamePhase::Moving);
        assert_eq!(outcome.events[0], GameEvent::Started);
        // Impulse lands first, gravity follows in the same tick
        assert_eq!(state.ball.vel_y, JUMP_SPEED + GRAVITY);
        assert_eq!(state.ball.y, start_y + JUMP_SPEED + GRAVITY);
        assert!(state.ball.y < start_y);
    }

    #[test]
    fn test_jump_retriggers_mid_air() {
        let mut state = GameState::default();
        let mut gaps = ScriptedGaps::new(&[0]);
        tick(&mut state, &JUMP, &mut gaps);
        for _ in 0..5 {
            tick(&mut state, &IDLE, &mut gaps);
        }
        assert!(state.ball.vel_y > JUMP_SPEED + GRAVITY);

        let outcome = tick(&mut state, &JUMP, &mut gaps);
        assert!(!outcome.events.contains(&GameEvent::Started));
        assert_eq!(state.ball.vel_y, JUMP_SPEED + GRAVITY);
    }

    #[test]
    fn test_first_wall_spawns_at_right_edge() {
        let mut state = GameState::default();
        let mut gaps = ScriptedGaps::new(&[37]);

        let outcome = tick(&mut state, &JUMP, &mut gaps);

        assert_eq!(gaps.spans, vec![PLAYFIELD_HEIGHT - GAP_HEIGHT]);
        assert!(outcome.events.contains(&GameEvent::WallSpawned { gap_y: 137 }));
        assert_eq!(state.walls.len(), 1);
        // Spawned at the edge, then scrolled once
        assert_eq!(state.walls[0], Wall::new(1100 - WALL_SPEED, 137));
    }

    #[test]
    fn test_scripted_gap_sequence() {
        let mut state = GameState::default();
        let mut gaps = ScriptedGaps::new(&[5, 250, 479]);
        tick(&mut state, &JUMP, &mut gaps);

        // The third wall spawns long before the first one reaches the ball
        while state.walls_spawned < 3 {
            tick(&mut state, &IDLE, &mut gaps);
        }

        assert!(!state.is_over());
        let gap_ys: Vec<i32> = state.walls.iter().map(|w| w.gap_y).collect();
        assert_eq!(gap_ys, vec![105, 350, 579]);
    }

    #[test]
    fn test_spawn_spacing() {
        let mut state = GameState::default();
        let mut gaps = ScriptedGaps::new(&[240]);
        tick(&mut state, &JUMP, &mut gaps);

        let mut spawn_ticks = vec![0u64];
        for _ in 0..2000 {
            // Park the ball in the middle of every opening
            state.ball.y = 400.0;
            state.ball.vel_y = 0.0;
            let frame = state.frame_count;
            let outcome = tick(&mut state, &IDLE, &mut gaps);
            assert!(!state.is_over());
            if outcome
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::WallSpawned { .. }))
            {
                spawn_ticks.push(frame);
            }
        }

        assert!(spawn_ticks.len() > 3);
        for pair in spawn_ticks.windows(2) {
            let travel = ((pair[1] - pair[0]) as i32 * WALL_SPEED) as f32;
            assert!(travel >= WALL_SPACING);
        }
    }

    #[test]
    fn test_walls_expire_off_the_left_edge() {
        let mut state = GameState::default();
        state.phase = GamePhase::Moving;
        state.ball.y = 400.0;
        state.walls.push_back(Wall::new(81, 340));
        state.walls.push_back(Wall::new(400, 340));
        let mut gaps = ScriptedGaps::new(&[0]);

        // 81 -> 79; right edge 99 < 100
        let outcome = tick(&mut state, &IDLE, &mut gaps);
        assert!(outcome.events.contains(&GameEvent::WallRemoved));
        assert_eq!(state.walls.front().map(|w| w.x), Some(398));
    }

    #[test]
    fn test_wall_flush_with_left_edge_stays() {
        let mut state = GameState::default();
        state.phase = GamePhase::Moving;
        state.ball.y = 400.0;
        state.walls.push_back(Wall::new(82, 340));
        let mut gaps = ScriptedGaps::new(&[0]);

        // 82 -> 80; right edge 100 is not left of 100
        tick(&mut state, &IDLE, &mut gaps);
        assert_eq!(state.walls.front().map(|w| w.x), Some(80));
    }

    #[test]
    fn test_ball_in_gap_survives() {
        let mut state = GameState::default();
        state.phase = GamePhase::Moving;
        // Wall will sit at 340 after scrolling; opening 300..420
        state.walls.push_back(Wall::new(342, 300));
        state.ball.y = 360.0 - GRAVITY;
        let mut gaps = ScriptedGaps::new(&[0]);

        let outcome = tick(&mut state, &IDLE, &mut gaps);

        assert!(!state.is_over());
        assert!(
            !outcome
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Collided { .. }))
        );
    }

    #[test]
    fn test_ball_straddling_gap_bottom_ends_game_for_good() {
        let mut state = GameState::default();
        state.phase = GamePhase::Moving;
        state.walls.push_back(Wall::new(342, 300));
        state.ball.y = 410.0 - GRAVITY; // bottom 425 after gravity
        let mut gaps = ScriptedGaps::new(&[0]);

        let outcome = tick(&mut state, &IDLE, &mut gaps);
        assert!(outcome.events.contains(&GameEvent::Collided { wall_x: 340 }));
        assert_eq!(state.phase, GamePhase::Over);

        let frozen = state.clone();
        for input in [IDLE, JUMP, IDLE, JUMP] {
            let outcome = tick(&mut state, &input, &mut gaps);
            assert_eq!(outcome, TickOutcome::default());
            assert_eq!(state, frozen);
        }
    }

    #[test]
    fn test_telemetry_cadence_and_values() {
        let mut state = GameState::default();
        let mut gaps = ScriptedGaps::new(&[0]);

        let first = tick(&mut state, &JUMP, &mut gaps).telemetry.unwrap();
        assert_eq!(first.frame, 0);
        assert_eq!(first.elapsed, 0.0);
        // Wall at 1098, ball right edge 365
        assert_eq!(first.wall_distance, 733.0);
        // y = 195 - 5.5, baseline 115
        assert_eq!(first.ball_height, 74.5);
        assert_eq!(first.ball_speed, -5.5);
        // Opening 100..220, centre 160
        assert_eq!(first.gap_center_height, 45.0);

        let mut reported = Vec::new();
        for _ in 0..30 {
            state.ball.y = 160.0;
            state.ball.vel_y = 0.0;
            if let Some(t) = tick(&mut state, &IDLE, &mut gaps).telemetry {
                reported.push(t.frame);
            }
        }
        assert_eq!(reported, vec![12, 24]);
    }

    #[test]
    fn test_telemetry_format() {
        let t = Telemetry {
            elapsed: 1.2,
            frame: 60,
            wall_distance: 100.0,
            ball_height: 42.5,
            ball_speed: -3.25,
            gap_center_height: 200.0,
        };
        assert_eq!(
            t.to_string(),
            "time: 1.20 s, frame: 60.00, wall distance: 100.00 px, ball height: 42.50 px, \
             ball speed: -3.25 px/tick, gap center height: 200.00 px"
        );
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::default();
        let mut state2 = GameState::default();
        let mut rng1 = seeded(99999);
        let mut rng2 = seeded(99999);

        for i in 0..400 {
            let input = TickInput { jump: i % 14 == 0 };
            tick(&mut state1, &input, &mut rng1);
            tick(&mut state2, &input, &mut rng2);
        }

        assert_eq!(state1, state2);
    }

    #[test]
    fn test_custom_playfield() {
        let field = Playfield { x: 0, y: 0, width: 400, height: 300 };
        let mut state = GameState::new(field);
        let mut gaps = ScriptedGaps::new(&[0]);
        tick(&mut state, &JUMP, &mut gaps);
        assert_eq!(gaps.spans, vec![300 - GAP_HEIGHT]);
        assert_eq!(state.walls[0].x, 400 - WALL_SPEED);
    }

    proptest! {
        #[test]
        fn prop_physics_step(
            y in 120.0f32..680.0,
            vel in -6.0f32..12.0,
        ) {
            let mut state = GameState::default();
            state.phase = GamePhase::Moving;
            state.ball.y = y;
            state.ball.vel_y = vel;
            let mut gaps = ScriptedGaps::new(&[0]);

            tick(&mut state, &IDLE, &mut gaps);

            let field = state.field;
            let r = state.ball.radius() as f32;
            let raw_v = vel + GRAVITY;
            let raw_y = y + raw_v;
            if raw_y + r >= field.bottom() as f32 || raw_y - r <= field.top() as f32 {
                prop_assert_eq!(state.ball.vel_y, 0.0);
            } else {
                prop_assert_eq!(state.ball.vel_y, raw_v);
                prop_assert_eq!(state.ball.y, raw_y);
            }
            prop_assert!(state.ball.y >= (field.top() as f32) + r);
            prop_assert!(state.ball.y <= (field.bottom() as f32) - r);
        }

        #[test]
        fn prop_walls_stay_ordered(seed in any::<u64>(), jump_every in 8u32..20) {
            let mut state = GameState::default();
            let mut rng = seeded(seed);
            for i in 0..1500u32 {
                let input = TickInput { jump: i % jump_every == 0 };
                tick(&mut state, &input, &mut rng);
                prop_assert!(state.walls_ordered());
                let r = state.ball.radius() as f32;
                prop_assert!(state.ball.y >= (state.field.top() as f32) + r);
                prop_assert!(state.ball.y <= (state.field.bottom() as f32) - r);
                for wall in &state.walls {
                    prop_assert!(wall.gap_y >= state.field.top());
                    prop_assert!(wall.gap_bottom() <= state.field.bottom());
                }
            }
        }
    }
}
