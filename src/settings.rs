//! Game modes
//!
//! The version picked on the menu changes cosmetics only - backdrop art
//! and obstacle styling - never physics, spawn cadence or scoring.

use serde::{Deserialize, Serialize};

use crate::sim::PigSkin;

/// Selectable game versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    /// Cathedral backdrop with cartoon pigs
    #[default]
    Cathedral,
    /// Plain sky with photo-real pigs
    RealisticPigs,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Cathedral => "cathedral",
            GameMode::RealisticPigs => "realistic-pigs",
        }
    }

    /// Parse a mode selector at the UI boundary. Unknown selectors are
    /// rejected here; the simulation never sees an invalid mode.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cathedral" => Some(GameMode::Cathedral),
            "realistic-pigs" | "realistic_pigs" | "pigs" => Some(GameMode::RealisticPigs),
            _ => None,
        }
    }

    /// Styling tag stamped onto pigs spawned in this mode
    pub fn pig_skin(&self) -> PigSkin {
        match self {
            GameMode::Cathedral => PigSkin::Cartoon,
            GameMode::RealisticPigs => PigSkin::Realistic,
        }
    }

    /// Whether the renderer should draw the cathedral backdrop image
    /// (the plain-sky version draws clouds instead)
    pub fn has_backdrop_image(&self) -> bool {
        matches!(self, GameMode::Cathedral)
    }
}
