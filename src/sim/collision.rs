//! Collision detection against the ground and pipe gaps
//!
//! A pipe is solid everywhere except its gap, so the test is inverted: the
//! player is safe while its box sits inside the gap's vertical span, or
//! when it does not overlap the pipe horizontally at all. The collision gap
//! is `COLLISION_BUFFER` narrower per side and taller per side than the
//! drawn gap, so clipping a pipe edge slightly is forgiven.

use glam::Vec2;

use super::pipes::{Pipe, PipeRing};
use super::state::Player;
use crate::consts::*;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap on x; touching edges do not count
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
    }

    /// Whether `inner` lies within this box's vertical span (edges inclusive)
    pub fn contains_y(&self, inner: &Aabb) -> bool {
        inner.min.y >= self.min.y && inner.max.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// The player's square hit box
pub fn player_box(player: &Player) -> Aabb {
    Aabb::from_center(player.pos(), Vec2::splat(PLAYER_WIDTH / 2.0))
}

/// The lenient gap used for collisions
pub fn collision_gap(pipe: &Pipe) -> Aabb {
    Aabb::new(
        Vec2::new(
            pipe.left() + COLLISION_BUFFER,
            pipe.gap_top() - COLLISION_BUFFER,
        ),
        Vec2::new(
            pipe.right() - COLLISION_BUFFER,
            pipe.gap_bottom() + COLLISION_BUFFER,
        ),
    )
}

/// Ground contact, boundary inclusive
pub fn hits_ground(player: &Player) -> bool {
    player.y + PLAYER_WIDTH / 2.0 >= GROUND_Y + COLLISION_BUFFER
}

/// Whether a player box collides with `pipe`
pub fn hits_pipe(player: &Aabb, pipe: &Pipe) -> bool {
    let gap = collision_gap(pipe);
    if !player.overlaps_x(&gap) {
        return false;
    }
    !gap.contains_y(player)
}

/// First slot (in index order) the player collides with, if any.
/// Parked slots are checked too; they never reach the player.
pub fn find_pipe_hit(player: &Player, pipes: &PipeRing) -> Option<usize> {
    let hit_box = player_box(player);
    pipes.iter().position(|pipe| hits_pipe(&hit_box, pipe))
}
