//! Obstacle spawning
//!
//! Two independent counter-driven timers feed the world: pigs along the
//! ground every 120 ticks, crows through the flight band every 180. Every
//! randomized attribute is a uniform draw from a documented range, taken
//! from whatever `Rng` the caller hands in - the session passes its seeded
//! `Pcg32`, tests pass a fixed seed for exact reproducibility.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::settings::GameMode;
use crate::sim::state::{Cloud, Obstacle, ObstacleKind, Viewport};

/// Floor an extent at the minimum the collision detector tolerates.
///
/// The documented ranges can't produce degenerate values, but a
/// misconfigured range must not leak zero/negative geometry downstream.
#[inline]
fn clamp_extent(extent: f32) -> f32 {
    extent.max(MIN_OBSTACLE_EXTENT)
}

/// Build a pig at the right viewport edge.
///
/// Height and speed are randomized; the bottom edge rests on the ground
/// strip and the skin tag comes from the current game mode.
pub fn spawn_pig(rng: &mut impl Rng, viewport: Viewport, mode: GameMode) -> Obstacle {
    let height = clamp_extent(rng.random_range(PIG_MIN_HEIGHT..PIG_MAX_HEIGHT));
    Obstacle {
        pos: Vec2::new(viewport.spawn_x(), viewport.ground_top() - height),
        size: Vec2::new(clamp_extent(PIG_WIDTH), height),
        speed: rng.random_range(PIG_MIN_SPEED..PIG_MAX_SPEED),
        kind: ObstacleKind::Pig {
            skin: mode.pig_skin(),
        },
    }
}

/// Build a crow at the right viewport edge, somewhere in the flight band,
/// with its wings mid-flap.
pub fn spawn_crow(rng: &mut impl Rng, viewport: Viewport) -> Obstacle {
    Obstacle {
        pos: Vec2::new(viewport.spawn_x(), rng.random_range(CROW_MIN_Y..CROW_MAX_Y)),
        size: Vec2::new(clamp_extent(CROW_WIDTH), clamp_extent(CROW_HEIGHT)),
        speed: rng.random_range(CROW_MIN_SPEED..CROW_MAX_SPEED),
        kind: ObstacleKind::Crow {
            wing_phase: rng.random_range(0.0..std::f32::consts::TAU),
        },
    }
}

/// Seed the initial cloud field, scattered across the whole sky.
pub fn seed_clouds(rng: &mut impl Rng, viewport: Viewport) -> Vec<Cloud> {
    (0..CLOUD_COUNT)
        .map(|_| Cloud {
            pos: Vec2::new(
                rng.random_range(0.0..viewport.width.max(1.0)),
                rng.random_range(CLOUD_MIN_Y..CLOUD_MAX_Y),
            ),
            width: rng.random_range(CLOUD_MIN_WIDTH..CLOUD_MAX_WIDTH),
            speed: rng.random_range(CLOUD_MIN_SPEED..CLOUD_MAX_SPEED),
        })
        .collect()
}

/// Recycle a cloud that drifted off the left edge: back to the right edge
/// at a fresh altitude, keeping its width and speed.
pub fn respawn_cloud(cloud: &mut Cloud, rng: &mut impl Rng, viewport: Viewport) {
    cloud.pos.x = viewport.spawn_x();
    cloud.pos.y = rng.random_range(CLOUD_MIN_Y..CLOUD_MAX_Y);
}
