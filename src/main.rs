//! Birch Runner entry point
//!
//! Headless demo: runs one autopiloted session to game over and dumps the
//! final snapshot as JSON. The real game embeds the library behind a
//! renderer; this binary exercises the core end to end.
//!
//! Usage: `birch-runner [seed] [mode]`

use std::error::Error;

use birch_runner::GameMode;
use birch_runner::sim::{GameSession, ObstacleKind, SessionPhase, Snapshot, TickInput};

/// How far ahead of the player a pig triggers the autopilot jump
const JUMP_LEAD: f32 = 90.0;
/// Hard cap so a perfect autopilot still terminates
const MAX_DEMO_TICKS: u64 = 36_000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(0xB12C);
    let mode = std::env::args()
        .nth(2)
        .and_then(|s| GameMode::from_str(&s))
        .unwrap_or_default();

    log::info!("Birch Runner (headless) starting, seed {seed}, mode {}", mode.as_str());

    let mut session = GameSession::new(seed);
    session.set_viewport(800.0, 400.0);
    session.start(mode);

    let mut ticks = 0u64;
    while session.phase() == SessionPhase::Running && ticks < MAX_DEMO_TICKS {
        let jump = session.snapshot().is_some_and(|s| should_jump(&s));
        session.advance_tick(&TickInput { jump });
        ticks += 1;
    }

    log::info!("finished after {ticks} ticks, score {}", session.score());

    if let Some(snapshot) = session.snapshot() {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

/// Crude autopilot: jump once a pig closes within [`JUMP_LEAD`], unless a
/// crow is overhead (jumping into the flight band would end the run).
fn should_jump(snapshot: &Snapshot<'_>) -> bool {
    if snapshot.player.airborne {
        return false;
    }
    let player_right = snapshot.player.pos.x + snapshot.player.size.x;

    let crow_overhead = snapshot.obstacles.iter().any(|o| {
        matches!(o.kind, ObstacleKind::Crow { .. })
            && o.pos.x + o.size.x > snapshot.player.pos.x - JUMP_LEAD
            && o.pos.x < player_right + JUMP_LEAD
    });
    if crow_overhead {
        return false;
    }

    snapshot.obstacles.iter().any(|o| {
        matches!(o.kind, ObstacleKind::Pig { .. })
            && o.pos.x > snapshot.player.pos.x
            && o.pos.x - player_right < JUMP_LEAD
    })
}
