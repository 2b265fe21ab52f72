//! Vertical physics for the player
//!
//! A plain per-tick Euler step: constant gravity, a fixed jump impulse, and
//! a hard ground clamp. There is no horizontal motion - the world scrolls,
//! the player doesn't.

use crate::sim::state::Player;

/// Advance the player's vertical motion by one tick.
///
/// `jump_requested` is the edge-triggered input signal for this tick. It
/// only takes effect while the player is grounded; requests while airborne
/// are ignored outright (no double jump, no queuing). `ground_line` is the
/// largest y the player's top edge may reach (y grows downward), read fresh
/// from the viewport every tick.
pub fn integrate(player: &mut Player, jump_requested: bool, ground_line: f32) {
    if jump_requested && !player.airborne {
        player.velocity = player.jump_impulse;
        player.airborne = true;
    }

    player.velocity += player.gravity;
    player.pos.y += player.velocity;

    // Clamp before anything downstream can see the player below ground;
    // this also holds on the very first tick while standing still.
    if player.pos.y > ground_line {
        player.pos.y = ground_line;
        player.velocity = 0.0;
        player.airborne = false;
    }
}
