//! Progression controller
//!
//! Three independent intervals: score (+1 every second), ramp (speed
//! multiplier bump every 10s) and level (every 60s). Bonuses stack
//! additively on the multiplier.

use super::state::{GameEvent, GameState};
use super::timer::fires;
use crate::consts::*;

pub fn on_score_tick(state: &mut GameState) {
    state.score += 1;
}

pub fn on_ramp_tick(state: &mut GameState) {
    state.speed_multiplier += RAMP_STEP * state.profile.speed_factor;
    log::debug!("Speed ramp -> x{:.2}", state.speed_multiplier);
}

pub fn on_level_tick(state: &mut GameState) {
    state.level += 1;
    state.speed_multiplier += LEVEL_SPEED_STEP * state.profile.speed_factor;
    state.spawn_window.tighten();

    let visual_level = state.visual_level();
    log::info!(
        "Level {} (speed x{:.2}, spawn {:.0}-{:.0}ms)",
        state.level,
        state.speed_multiplier,
        state.spawn_window.min_ms,
        state.spawn_window.max_ms
    );
    state.events.push(GameEvent::LevelUp {
        level: state.level,
        visual_level,
    });
}

/// Run the progression intervals for `dt_ms`
pub fn run_progression(state: &mut GameState, dt_ms: f64) {
    for _ in 0..fires(&mut state.timers.score, dt_ms) {
        on_score_tick(state);
    }
    for _ in 0..fires(&mut state.timers.ramp, dt_ms) {
        on_ramp_tick(state);
    }
    for _ in 0..fires(&mut state.timers.level, dt_ms) {
        on_level_tick(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use crate::sim::{Difficulty, start};

    fn started(difficulty: Difficulty) -> GameState {
        let mut state = GameState::new(1, Viewport::default(), 0);
        start(&mut state, difficulty);
        state
    }

    #[test]
    fn test_score_ticks_each_second() {
        let mut state = started(Difficulty::Normal);
        run_progression(&mut state, 999.0);
        assert_eq!(state.score, 0);
        run_progression(&mut state, 1.0);
        assert_eq!(state.score, 1);
        run_progression(&mut state, 5000.0);
        assert_eq!(state.score, 6);
    }

    #[test]
    fn test_ramp_scales_with_speed_factor() {
        let mut state = started(Difficulty::Hard);
        run_progression(&mut state, RAMP_INTERVAL_MS);
        assert!((state.speed_multiplier - (1.0 + 0.3 * 1.2)).abs() < 1e-5);
    }

    #[test]
    fn test_level_up_after_a_minute() {
        let mut state = started(Difficulty::Normal);
        let initial = state.profile.spawn_window();
        run_progression(&mut state, LEVEL_INTERVAL_MS);

        assert_eq!(state.level, 2);
        assert_eq!(state.score, 60);
        assert!(state.spawn_window.min_ms < initial.min_ms);
        assert!(state.spawn_window.max_ms < initial.max_ms);
        // Six ramps plus one level bonus, all additive
        assert!((state.speed_multiplier - (1.0 + 6.0 * 0.3 + 0.6)).abs() < 1e-4);
        assert!(state.events.contains(&GameEvent::LevelUp {
            level: 2,
            visual_level: 2
        }));
    }

    #[test]
    fn test_cancelled_timers_do_nothing() {
        let mut state = started(Difficulty::Normal);
        state.timers.cancel_all();
        run_progression(&mut state, LEVEL_INTERVAL_MS * 3.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.speed_multiplier, 1.0);
    }
}
