//! Birch Runner - a side-scrolling reaction game
//!
//! A birch tree sprints in place while pigs charge along the ground and
//! crows swoop through the sky; one tap makes it jump, and the score climbs
//! with survival time. This crate is the simulation core only:
//! - `sim`: deterministic tick-driven gameplay (physics, spawning,
//!   collision detection, session lifecycle)
//! - `settings`: game mode selection (cosmetic versions)
//!
//! Rendering, raw input handling and the surrounding menu shell are the
//! host's job: translate pointer/touch events into [`sim::TickInput`], call
//! [`sim::GameSession::advance_tick`] once per frame, and draw from
//! [`sim::GameSession::snapshot`].

pub mod settings;
pub mod sim;

pub use settings::GameMode;
pub use sim::{GameSession, SessionPhase, Snapshot, TickInput};

/// Game configuration constants
///
/// Everything is expressed per tick: one tick is one `advance_tick` call,
/// however often the host chooses to schedule it.
pub mod consts {
    /// Default playfield size (px); hosts override via `set_viewport`
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 400.0;
    /// Height of the ground strip along the bottom edge
    pub const GROUND_STRIP_HEIGHT: f32 = 20.0;

    /// Player defaults - the birch stands still horizontally
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Downward acceleration, px/tick²
    pub const GRAVITY: f32 = 0.8;
    /// Velocity set on jump, px/tick (negative = up)
    pub const JUMP_IMPULSE: f32 = -15.0;

    /// Pig (ground obstacle) parameters
    pub const PIG_WIDTH: f32 = 50.0;
    pub const PIG_MIN_HEIGHT: f32 = 40.0;
    pub const PIG_MAX_HEIGHT: f32 = 50.0;
    pub const PIG_MIN_SPEED: f32 = -7.0;
    pub const PIG_MAX_SPEED: f32 = -5.0;
    /// Ticks between pig spawns
    pub const PIG_SPAWN_INTERVAL: u32 = 120;

    /// Crow (aerial obstacle) parameters
    pub const CROW_WIDTH: f32 = 35.0;
    pub const CROW_HEIGHT: f32 = 25.0;
    /// Flight band: crows spawn with y in [CROW_MIN_Y, CROW_MAX_Y)
    pub const CROW_MIN_Y: f32 = 100.0;
    pub const CROW_MAX_Y: f32 = 250.0;
    pub const CROW_MIN_SPEED: f32 = -5.0;
    pub const CROW_MAX_SPEED: f32 = -3.0;
    /// Ticks between crow spawns
    pub const CROW_SPAWN_INTERVAL: u32 = 180;
    /// Wing flap phase advance per tick (cosmetic)
    pub const WING_FLAP_RATE: f32 = 0.3;

    /// Decorative cloud field
    pub const CLOUD_COUNT: usize = 5;
    pub const CLOUD_MIN_Y: f32 = 50.0;
    pub const CLOUD_MAX_Y: f32 = 150.0;
    pub const CLOUD_MIN_WIDTH: f32 = 60.0;
    pub const CLOUD_MAX_WIDTH: f32 = 100.0;
    pub const CLOUD_MIN_SPEED: f32 = -1.0;
    pub const CLOUD_MAX_SPEED: f32 = -0.5;

    /// Smallest extent an obstacle dimension may take; spawn parameters are
    /// clamped here so degenerate geometry never reaches collision checks
    pub const MIN_OBSTACLE_EXTENT: f32 = 1.0;

    /// Elapsed ticks per displayed score point
    pub const TICKS_PER_POINT: u64 = 10;
}
