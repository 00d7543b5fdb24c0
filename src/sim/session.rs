//! Session state machine
//!
//! `Idle -> Running <-> Paused`, `Running -> GameOver`. Starting again from
//! `GameOver` (or `Idle`) performs a full reset. Illegal requests such as
//! pausing twice are silently ignored.

use super::difficulty::Difficulty;
use super::spawn::next_spawn_delay;
use super::state::{GameEvent, GameState, SessionPhase};

/// Begin a fresh session. Ignored while a session is running or paused.
pub fn start(state: &mut GameState, difficulty: Difficulty) -> bool {
    if matches!(state.phase, SessionPhase::Running | SessionPhase::Paused) {
        log::debug!("Start ignored: session already in progress");
        return false;
    }

    state.reset_session(difficulty);
    let first_spawn = next_spawn_delay(state);
    state.timers.arm(first_spawn);
    state.phase = SessionPhase::Running;

    log::info!(
        "Session started: {} (seed {}, best {})",
        difficulty.as_str(),
        state.seed,
        state.best_score
    );
    state.events.push(GameEvent::Started { difficulty });
    true
}

/// Freeze the session, cancelling every timer and capturing the shield remainder
pub fn pause(state: &mut GameState) -> bool {
    if state.phase != SessionPhase::Running {
        return false;
    }
    state.timers.cancel_all();
    state.shield.suspend(state.now_ms);
    state.phase = SessionPhase::Paused;

    log::info!(
        "Paused (shield {:.1}s left)",
        state.shield.remaining_ms(state.now_ms) / 1000.0
    );
    state.events.push(GameEvent::Paused);
    true
}

/// Continue a paused session with fresh timers and the preserved shield
pub fn resume(state: &mut GameState) -> bool {
    if state.phase != SessionPhase::Paused {
        return false;
    }
    let first_spawn = next_spawn_delay(state);
    state.timers.arm(first_spawn);
    state.shield.restore(state.now_ms);
    state.phase = SessionPhase::Running;

    log::info!("Resumed");
    state.events.push(GameEvent::Resumed);
    true
}

/// Pause if running, resume if paused
pub fn toggle_pause(state: &mut GameState) -> bool {
    match state.phase {
        SessionPhase::Running => pause(state),
        SessionPhase::Paused => resume(state),
        _ => false,
    }
}

/// Terminal transition: halt everything and settle the best score.
/// Persisting the new best is left to whoever consumes the event.
pub(crate) fn game_over(state: &mut GameState) {
    if state.phase == SessionPhase::GameOver {
        return;
    }
    state.timers.cancel_all();
    state.shield.clear();
    state.avatar.velocity = 0.0;
    state.phase = SessionPhase::GameOver;

    let new_best = state.score > state.best_score;
    if new_best {
        state.best_score = state.score;
    }
    log::info!(
        "Game over: score {} (best {}{})",
        state.score,
        state.best_score,
        if new_best { ", new best" } else { "" }
    );
    state.events.push(GameEvent::GameOver {
        score: state.score,
        best: state.best_score,
        new_best,
    });
}
