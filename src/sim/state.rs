//! Entity and per-session world state
//!
//! Everything one run owns lives here: the player, the live obstacle
//! collection, the decorative cloud field, both spawn timers and the tick
//! counter. The world is created by `start`, mutated only by the tick
//! driver, and dropped wholesale on reset.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::collision::Rect;
use crate::sim::spawn;

/// The player-controlled birch, subject to gravity and jump impulses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; only `pos.y` changes after creation
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity, px/tick (negative = up)
    pub velocity: f32,
    /// Downward acceleration, px/tick²
    pub gravity: f32,
    /// Velocity set when a jump fires
    pub jump_impulse: f32,
    /// True from jump until the next landing
    pub airborne: bool,
}

impl Player {
    /// Player standing on the given ground line at the fixed start x.
    pub fn new(ground_line: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, ground_line),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity: 0.0,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            airborne: false,
        }
    }

    /// Collision bounds
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Visual styling tag stamped onto a pig at spawn time from the game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PigSkin {
    /// Flat cartoon pig (pink)
    Cartoon,
    /// Photo-real pig of the "realistic pigs" version (tan)
    Realistic,
}

/// Obstacle kinds and their per-kind payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ground-hugging pig; the skin only affects how it is drawn
    Pig { skin: PigSkin },
    /// Flying crow; `wing_phase` drives the flap animation and nothing else
    Crow { wing_phase: f32 },
}

/// A single approaching obstacle.
///
/// Both kinds share the same geometry-plus-velocity shape and advance the
/// same way; the kind tag carries what differs between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed, px/tick, stored negative so advancing is an add
    pub speed: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Collision bounds
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// True once the obstacle is fully past the left edge
    #[inline]
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Background cloud. Pure decoration: drifts left, wraps around to the
/// right edge, and never takes part in collision checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub width: f32,
    /// Drift speed, px/tick, stored negative like obstacle speeds
    pub speed: f32,
}

impl Cloud {
    /// True once the cloud has drifted fully past the left edge
    #[inline]
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.width < 0.0
    }
}

/// Counter-driven spawn cadence for one obstacle kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnTimer {
    ticks: u32,
    interval: u32,
}

impl SpawnTimer {
    pub fn new(interval: u32) -> Self {
        Self { ticks: 0, interval }
    }

    /// Count one tick. Fires (returns true and resets to 0) once the
    /// counter exceeds the interval, so an interval of 120 fires on the
    /// 121st tick after the last firing.
    pub fn advance(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks > self.interval {
            self.ticks = 0;
            true
        } else {
            false
        }
    }

    /// Current counter value
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

/// Playfield dimensions as last reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Top of the ground strip; obstacle bottoms rest here
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.height - GROUND_STRIP_HEIGHT
    }

    /// Largest y the player's top edge may reach while standing
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.ground_top() - PLAYER_HEIGHT
    }

    /// X coordinate where new obstacles enter the playfield
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.width
    }
}

/// Everything a single run owns.
///
/// The session is the only owner; nothing outside the simulation mutates a
/// world, and it is discarded wholesale on restart so state can never leak
/// between runs.
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    /// Live obstacles in spawn order, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Decorative cloud field
    pub clouds: Vec<Cloud>,
    pub pig_timer: SpawnTimer,
    pub crow_timer: SpawnTimer,
    /// Monotonic tick counter; the displayed score derives from it
    pub elapsed_ticks: u64,
    /// Per-session RNG; all randomness flows through here
    pub rng: Pcg32,
}

impl World {
    /// Fresh world for a new run: player on the ground line, no obstacles,
    /// a scattered cloud field, both timers at zero.
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = spawn::seed_clouds(&mut rng, viewport);
        Self {
            player: Player::new(viewport.ground_line()),
            obstacles: Vec::new(),
            clouds,
            pig_timer: SpawnTimer::new(PIG_SPAWN_INTERVAL),
            crow_timer: SpawnTimer::new(CROW_SPAWN_INTERVAL),
            elapsed_ticks: 0,
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_timer_fires_after_interval() {
        let mut timer = SpawnTimer::new(120);
        for tick in 1..=120 {
            assert!(!timer.advance(), "fired early at tick {tick}");
        }
        // Fires on the 121st tick, counter back at zero
        assert!(timer.advance());
        assert_eq!(timer.ticks(), 0);

        // And the cycle repeats identically
        for _ in 1..=120 {
            assert!(!timer.advance());
        }
        assert!(timer.advance());
    }

    #[test]
    fn test_default_viewport_ground_lines() {
        let viewport = Viewport::default();
        assert_eq!(viewport.ground_top(), 380.0);
        assert_eq!(viewport.ground_line(), 300.0);
    }

    #[test]
    fn test_new_world_is_empty_and_grounded() {
        let viewport = Viewport::default();
        let world = World::new(7, viewport);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.clouds.len(), CLOUD_COUNT);
        assert_eq!(world.elapsed_ticks, 0);
        assert_eq!(world.player.pos.y, viewport.ground_line());
        assert!(!world.player.airborne);
    }

    #[test]
    fn test_off_screen_threshold() {
        let obstacle = Obstacle {
            pos: glam::Vec2::new(-50.0, 340.0),
            size: glam::Vec2::new(50.0, 40.0),
            speed: -5.0,
            kind: ObstacleKind::Pig {
                skin: PigSkin::Cartoon,
            },
        };
        // Right edge exactly at x=0 still counts as on screen
        assert!(!obstacle.off_screen());

        let mut gone = obstacle.clone();
        gone.pos.x = -50.1;
        assert!(gone.off_screen());
    }
}
