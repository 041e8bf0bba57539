//! Ball versus wall collision
//!
//! A wall is solid everywhere except its opening. The ball only needs testing
//! against walls it horizontally overlaps; against those it is safe only when
//! its whole vertical span fits inside the opening.

use super::state::{Ball, Wall};

/// Whether the ball's horizontal span strictly overlaps the wall's
#[inline]
pub fn overlaps_horizontally(ball: &Ball, wall: &Wall) -> bool {
    ball.right() > wall.x && ball.left() < wall.right()
}

/// Whether a vertical span `[top, bottom]` pokes out of the wall's opening
#[inline]
pub fn outside_gap(top: f32, bottom: f32, wall: &Wall) -> bool {
    top < wall.gap_y as f32 || bottom > wall.gap_bottom() as f32
}

/// Check collision between the ball and a single wall
pub fn ball_hits_wall(ball: &Ball, wall: &Wall) -> bool {
    overlaps_horizontally(ball, wall) && outside_gap(ball.top(), ball.bottom(), wall)
}

/// First wall (front to back) the ball is touching, if any
pub fn first_hit<'a>(ball: &Ball, walls: impl IntoIterator<Item = &'a Wall>) -> Option<&'a Wall> {
    walls.into_iter().find(|wall| ball_hits_wall(ball, wall))
}
