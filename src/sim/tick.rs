//! Frame tick
//!
//! Core game loop that advances a session by one frame. Within a frame the
//! order is fixed: shield expiry, pause toggle, avatar, spawns, entity motion, collisions,
//! compaction, then the progression intervals.

use super::autopilot;
use super::collision::resolve_collisions;
use super::progression::run_progression;
use super::session::toggle_pause;
use super::spawn::run_spawner;
use super::state::{Direction, GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steering intent; `None` keeps the current velocity
    pub direction: Option<Direction>,
    /// Absolute avatar left edge (pointer/touch drag)
    pub pointer_x: Option<f32>,
    /// Pause toggle
    pub pause: bool,
    /// Demo mode - the autopilot steers
    pub autopilot: bool,
}

/// Advance the game state by `dt_ms` of wall time
///
/// The session clock always advances so paused wall time is observable;
/// nothing else moves unless the session is running.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    state.events.clear();
    state.now_ms += dt_ms;

    // Expire before a pause can suspend the shield, so the lost cue still fires
    if state.is_running() && state.shield.expire_if_due(state.now_ms) {
        log::info!("Shield lost");
        state.events.push(GameEvent::ShieldLost {
            countdown_secs: SHIELD_LOST_COUNTDOWN_SECS,
        });
    }

    if input.pause {
        toggle_pause(state);
    }
    if !state.is_running() {
        return;
    }

    let direction = if input.autopilot {
        Some(autopilot::steer(state))
    } else {
        input.direction
    };
    if let Some(direction) = direction {
        state.avatar.set_direction(direction);
    }
    state.avatar.integrate(dt_ms);
    if let Some(x) = input.pointer_x {
        state.avatar.set_absolute_position(x);
    }

    run_spawner(state, dt_ms);

    let despawn_y = state.viewport.despawn_y();
    let multiplier = state.speed_multiplier;
    for entity in &mut state.entities {
        entity.step(dt_ms, multiplier, despawn_y);
    }

    resolve_collisions(state);
    state.compact();

    if !state.is_running() {
        return;
    }
    run_progression(state, dt_ms);
}
