//! Per-tick simulation driver
//!
//! Fixed order every tick: physics → spawners → advance/prune → collision
//! → score. All tuning values are per-tick quantities, so the outcome of a
//! run depends only on the tick count and the seed - the host's scheduling
//! jitter cannot change it.

use crate::consts::WING_FLAP_RATE;
use crate::settings::GameMode;
use crate::sim::collision::rects_overlap;
use crate::sim::physics;
use crate::sim::spawn;
use crate::sim::state::{ObstacleKind, Viewport, World};

/// Input signals for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Edge-triggered jump request. Ignored while airborne.
    pub jump: bool,
}

/// What one tick concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No collision; the run continues
    Continue,
    /// The player hit an obstacle; the world is frozen as of this tick
    Collision,
}

/// Advance the world by exactly one tick.
///
/// On a collision the world is left as it stood at the moment of impact
/// and the tick counter does not advance; the caller moves the session to
/// its terminal phase and must not tick again.
pub fn tick(
    world: &mut World,
    input: &TickInput,
    viewport: Viewport,
    mode: GameMode,
) -> TickOutcome {
    // Vertical motion first, so the collision check sees this tick's pose.
    // The ground line is re-derived from the viewport on every tick.
    physics::integrate(&mut world.player, input.jump, viewport.ground_line());

    // Spawn cadence. A freshly spawned obstacle is live immediately and
    // takes part in this tick's collision check.
    if world.pig_timer.advance() {
        let pig = spawn::spawn_pig(&mut world.rng, viewport, mode);
        world.obstacles.push(pig);
    }
    if world.crow_timer.advance() {
        let crow = spawn::spawn_crow(&mut world.rng, viewport);
        world.obstacles.push(crow);
    }

    // Advance everything, then prune. `retain` walks the whole collection,
    // so removing one obstacle can never skip evaluating another.
    for obstacle in &mut world.obstacles {
        obstacle.pos.x += obstacle.speed;
        if let ObstacleKind::Crow { wing_phase } = &mut obstacle.kind {
            *wing_phase += WING_FLAP_RATE;
        }
    }
    world.obstacles.retain(|o| !o.off_screen());

    // Clouds drift and wrap; gameplay never looks at them.
    for cloud in &mut world.clouds {
        cloud.pos.x += cloud.speed;
        if cloud.off_screen() {
            spawn::respawn_cloud(cloud, &mut world.rng, viewport);
        }
    }

    // Every live obstacle against the player.
    let player_bounds = world.player.bounds();
    if world
        .obstacles
        .iter()
        .any(|o| rects_overlap(&player_bounds, &o.bounds()))
    {
        return TickOutcome::Collision;
    }

    world.elapsed_ticks += 1;
    TickOutcome::Continue
}
