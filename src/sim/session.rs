//! Session lifecycle: NotStarted → Running → Ended
//!
//! The session owns the world for exactly one run and is the only surface
//! the UI shell talks to. It is also where the simulation is frozen after
//! a collision so the final layout and score stay displayable.

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_POINT;
use crate::settings::GameMode;
use crate::sim::state::{Cloud, Obstacle, Player, Viewport, World};
use crate::sim::tick::{TickInput, TickOutcome, tick};

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No world exists; the UI sits at mode selection
    NotStarted,
    /// A run is in progress and advances every tick
    Running,
    /// Terminal for this run; the final world is kept frozen for display
    Ended,
}

/// One playable session with an explicit create/reset lifecycle.
///
/// All obstacle and timer state lives behind this struct as one owned
/// world; there are no free-floating mutable globals to leak between runs.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: SessionPhase,
    mode: GameMode,
    viewport: Viewport,
    seed: u64,
    /// Runs started so far; salts the per-run seed
    runs: u32,
    world: Option<World>,
}

impl GameSession {
    /// New session at mode selection. `seed` makes every run of this
    /// session reproducible.
    pub fn new(seed: u64) -> Self {
        Self {
            phase: SessionPhase::NotStarted,
            mode: GameMode::default(),
            viewport: Viewport::default(),
            seed,
            runs: 0,
            world: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Displayed score: elapsed ticks / 10, floored. Zero before the first
    /// start; frozen once the session has ended.
    pub fn score(&self) -> u64 {
        self.world
            .as_ref()
            .map_or(0, |w| w.elapsed_ticks / TICKS_PER_POINT)
    }

    /// Update the playfield size reported by the host.
    ///
    /// Non-positive dimensions are rejected and the last known good value
    /// stays in effect, so NaN/infinity can never enter position math.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Viewport { width, height };
        } else {
            log::warn!("ignoring degenerate viewport {width}x{height}");
        }
    }

    /// Begin a run with the given mode.
    ///
    /// Policy: calling this while a run is already in progress (or ended)
    /// performs an implicit restart - the old world is discarded and a
    /// fresh one is created, exactly as if starting from NotStarted.
    pub fn start(&mut self, mode: GameMode) {
        let run_seed = (self.runs as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed);
        self.runs += 1;
        self.mode = mode;
        self.world = Some(World::new(run_seed, self.viewport));
        self.phase = SessionPhase::Running;
        log::info!("session started (mode: {}, run {})", mode.as_str(), self.runs);
    }

    /// Fresh run with the previously selected mode. Prior obstacles and
    /// timers are discarded wholesale - nothing leaks across runs.
    pub fn restart(&mut self) {
        self.start(self.mode);
    }

    /// Ended → NotStarted without auto-restarting, handing control back to
    /// mode selection. A no-op in any other phase; calling it twice leaves
    /// the same NotStarted state as calling it once.
    pub fn reset(&mut self) {
        if self.phase == SessionPhase::Ended {
            self.world = None;
            self.phase = SessionPhase::NotStarted;
            log::info!("session reset to mode selection");
        }
    }

    /// Advance the simulation one tick. Only does anything while Running;
    /// the host may keep scheduling calls after game over without effect.
    pub fn advance_tick(&mut self, input: &TickInput) {
        if self.phase != SessionPhase::Running {
            return;
        }
        let Some(world) = self.world.as_mut() else {
            return;
        };
        match tick(world, input, self.viewport, self.mode) {
            TickOutcome::Continue => {}
            TickOutcome::Collision => {
                self.phase = SessionPhase::Ended;
                log::info!("game over at score {}", self.score());
            }
        }
    }

    /// Read-only view for the rendering collaborator. `None` until the
    /// first start; after game over it keeps serving the frozen world.
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.world.as_ref().map(|w| Snapshot {
            player: &w.player,
            obstacles: &w.obstacles,
            clouds: &w.clouds,
            score: w.elapsed_ticks / TICKS_PER_POINT,
            phase: self.phase,
            mode: self.mode,
        })
    }
}

/// Per-tick read-only view handed to the renderer.
///
/// Borrows the session immutably, so the renderer cannot mutate simulation
/// state through it.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    /// Live obstacles in spawn order, oldest first
    pub obstacles: &'a [Obstacle],
    pub clouds: &'a [Cloud],
    pub score: u64,
    pub phase: SessionPhase,
    pub mode: GameMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;

    /// Tick with no jumps until the run ends (bounded so a regression
    /// can't hang the suite).
    fn run_to_game_over(session: &mut GameSession) -> u64 {
        let input = TickInput::default();
        let mut ticks = 0u64;
        while session.phase() == SessionPhase::Running {
            session.advance_tick(&input);
            ticks += 1;
            assert!(ticks < 50_000, "session never ended without jumping");
        }
        ticks
    }

    #[test]
    fn test_lifecycle_not_started_to_running_to_ended() {
        let mut session = GameSession::new(0xB12C);
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.snapshot().is_none());
        assert_eq!(session.score(), 0);

        session.start(GameMode::Cathedral);
        assert_eq!(session.phase(), SessionPhase::Running);
        assert!(session.snapshot().is_some());

        run_to_game_over(&mut session);
        assert_eq!(session.phase(), SessionPhase::Ended);
    }

    #[test]
    fn test_ticks_outside_running_are_noops() {
        let mut session = GameSession::new(1);
        session.advance_tick(&TickInput { jump: true });
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.snapshot().is_none());

        session.start(GameMode::Cathedral);
        run_to_game_over(&mut session);
        let final_score = session.score();
        let frozen = session.snapshot().unwrap().obstacles.len();

        // Extra ticks after game over change nothing
        for _ in 0..100 {
            session.advance_tick(&TickInput { jump: true });
        }
        assert_eq!(session.score(), final_score);
        assert_eq!(session.snapshot().unwrap().obstacles.len(), frozen);
    }

    #[test]
    fn test_score_monotonic_while_running_frozen_after() {
        let mut session = GameSession::new(2);
        session.start(GameMode::RealisticPigs);

        let mut last = session.score();
        while session.phase() == SessionPhase::Running {
            session.advance_tick(&TickInput::default());
            let score = session.score();
            assert!(score >= last);
            last = score;
        }
        assert_eq!(session.score(), last);
    }

    #[test]
    fn test_restart_discards_everything_and_keeps_mode() {
        let mut session = GameSession::new(3);
        session.start(GameMode::RealisticPigs);
        run_to_game_over(&mut session);
        assert!(session.score() > 0);

        session.restart();
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.mode(), GameMode::RealisticPigs);
        assert_eq!(session.score(), 0);
        let snapshot = session.snapshot().unwrap();
        assert!(snapshot.obstacles.is_empty(), "obstacles leaked across runs");
        assert!(!snapshot.player.airborne);
    }

    #[test]
    fn test_start_while_running_is_an_implicit_restart() {
        let mut session = GameSession::new(4);
        session.start(GameMode::Cathedral);
        for _ in 0..200 {
            session.advance_tick(&TickInput::default());
        }
        assert!(session.score() > 0);

        session.start(GameMode::RealisticPigs);
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.mode(), GameMode::RealisticPigs);
        assert_eq!(session.score(), 0);
        assert!(session.snapshot().unwrap().obstacles.is_empty());
    }

    #[test]
    fn test_reset_is_idempotent_and_only_applies_when_ended() {
        let mut session = GameSession::new(5);

        // Reset before any run: no-op
        session.reset();
        assert_eq!(session.phase(), SessionPhase::NotStarted);

        session.start(GameMode::Cathedral);
        // Reset mid-run: also a no-op, the run keeps going
        session.reset();
        assert_eq!(session.phase(), SessionPhase::Running);

        run_to_game_over(&mut session);
        session.reset();
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.snapshot().is_none());

        // Second reset yields the identical state
        session.reset();
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.snapshot().is_none());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_degenerate_viewport_keeps_last_good_value() {
        let mut session = GameSession::new(6);
        session.set_viewport(1024.0, 500.0);
        session.set_viewport(0.0, 500.0);
        session.set_viewport(-300.0, -1.0);
        assert_eq!(session.viewport().width, 1024.0);
        assert_eq!(session.viewport().height, 500.0);
    }

    #[test]
    fn test_jumping_clears_the_first_pig() {
        // With a jump timed against the first pig, the run must outlive
        // the no-input baseline.
        let mut no_jump = GameSession::new(7);
        no_jump.start(GameMode::Cathedral);
        let baseline = run_to_game_over(&mut no_jump);

        let mut jumper = GameSession::new(7);
        jumper.start(GameMode::Cathedral);
        let mut ticks = 0u64;
        while jumper.phase() == SessionPhase::Running && ticks <= baseline {
            // Jump whenever a pig closes within 60px of the player
            let jump = jumper.snapshot().is_some_and(|s| {
                s.obstacles.iter().any(|o| {
                    matches!(o.kind, ObstacleKind::Pig { .. })
                        && o.pos.x > s.player.pos.x
                        && o.pos.x - (s.player.pos.x + s.player.size.x) < 60.0
                })
            });
            jumper.advance_tick(&TickInput { jump });
            ticks += 1;
        }
        assert!(ticks > baseline, "jumping did not outlast standing still");
    }

    #[test]
    fn test_same_seed_reproduces_a_run() {
        let mut a = GameSession::new(99);
        let mut b = GameSession::new(99);
        a.start(GameMode::Cathedral);
        b.start(GameMode::Cathedral);
        let ticks_a = run_to_game_over(&mut a);
        let ticks_b = run_to_game_over(&mut b);
        assert_eq!(ticks_a, ticks_b);
        assert_eq!(a.score(), b.score());
    }
}
