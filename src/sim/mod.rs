//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick counts only, never wall-clock time
//! - Seeded RNG only
//! - Fixed update order within a tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use session::{GameSession, SessionPhase, Snapshot};
pub use state::{Cloud, Obstacle, ObstacleKind, PigSkin, Player, SpawnTimer, Viewport, World};
pub use tick::{TickInput, TickOutcome, tick};
