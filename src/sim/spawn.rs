//! Spawner
//!
//! Two schedules feed the active set: the randomized spawn countdown, whose
//! next delay is drawn from the current spawn window, and the fixed shield
//! drop interval that guarantees a shield every so often.

use glam::Vec2;
use rand::Rng;

use super::state::{BENEFIT_GLYPHS, EntityKind, FallingEntity, GameEvent, GameState, HAZARD_GLYPHS};
use super::timer::fires;
use crate::consts::*;

/// Category for a unit draw `r` in `[0, 1)`
pub fn kind_for_roll(r: f32, shield_probability: f32, benefit_probability: f32) -> EntityKind {
    if r < shield_probability {
        EntityKind::ShieldPickup
    } else if r < shield_probability + benefit_probability {
        EntityKind::Benefit
    } else {
        EntityKind::Hazard
    }
}

/// Draw the delay until the next spawn from the current window
pub fn next_spawn_delay(state: &mut GameState) -> f64 {
    let unit: f64 = state.rng.random();
    state.spawn_window.delay_for(unit)
}

/// Roll a category and add one entity at the top edge
pub fn spawn_random(state: &mut GameState) -> u32 {
    let r: f32 = state.rng.random();
    let kind = kind_for_roll(
        r,
        state.profile.shield_probability,
        state.profile.benefit_probability,
    );
    spawn(state, kind)
}

/// Add one entity of `kind` at a random column above the top edge
pub fn spawn(state: &mut GameState, kind: EntityKind) -> u32 {
    let variant = match kind {
        EntityKind::Hazard => state.rng.random_range(0..HAZARD_GLYPHS.len()) as u8,
        EntityKind::Benefit => state.rng.random_range(0..BENEFIT_GLYPHS.len()) as u8,
        EntityKind::ShieldPickup => 0,
    };
    let base: f32 = state.rng.random();
    let fall_speed = (ENTITY_MIN_SPEED + base * (ENTITY_MAX_SPEED - ENTITY_MIN_SPEED))
        * state.profile.speed_factor;

    let size = state.viewport.entity_size();
    let max_left = (state.viewport.width - size).max(0.0);
    let column: f32 = state.rng.random();
    let x = column * max_left;

    let id = state.next_entity_id();
    state.entities.push(FallingEntity {
        id,
        pos: Vec2::new(x, -ENTITY_SPAWN_OFFSET),
        fall_speed,
        kind,
        variant,
        size,
        removed: false,
    });
    log::trace!("Spawned {:?} #{} at x={:.0} speed={:.3}", kind, id, x, fall_speed);
    state.events.push(GameEvent::Spawned { id, kind });
    id
}

/// Run both spawn schedules for `dt_ms`
pub fn run_spawner(state: &mut GameState, dt_ms: f64) {
    if let Some(mut countdown) = state.timers.spawn {
        countdown.elapse(dt_ms);
        while countdown.is_due() {
            spawn_random(state);
            let delay = next_spawn_delay(state);
            countdown.rearm(delay);
        }
        state.timers.spawn = Some(countdown);
    }

    for _ in 0..fires(&mut state.timers.shield_drop, dt_ms) {
        log::debug!("Scheduled shield drop");
        spawn(state, EntityKind::ShieldPickup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use crate::sim::{Difficulty, start};

    #[test]
    fn test_kind_for_roll_bands() {
        assert_eq!(kind_for_roll(0.0, 0.08, 0.45), EntityKind::ShieldPickup);
        assert_eq!(kind_for_roll(0.079, 0.08, 0.45), EntityKind::ShieldPickup);
        assert_eq!(kind_for_roll(0.08, 0.08, 0.45), EntityKind::Benefit);
        assert_eq!(kind_for_roll(0.52, 0.08, 0.45), EntityKind::Benefit);
        assert_eq!(kind_for_roll(0.54, 0.08, 0.45), EntityKind::Hazard);
        assert_eq!(kind_for_roll(0.999, 0.08, 0.45), EntityKind::Hazard);
    }

    #[test]
    fn test_spawn_places_entity_in_bounds() {
        let mut state = GameState::new(3, Viewport::new(400.0, 1000.0), 0);
        start(&mut state, Difficulty::Hard);
        for _ in 0..200 {
            spawn_random(&mut state);
        }
        let size = state.viewport.entity_size();
        for e in &state.entities {
            assert!(e.pos.x >= 0.0 && e.pos.x <= 400.0 - size);
            assert_eq!(e.pos.y, -ENTITY_SPAWN_OFFSET);
            assert!(e.fall_speed >= ENTITY_MIN_SPEED * 1.2 - 1e-6);
            assert!(e.fall_speed <= ENTITY_MAX_SPEED * 1.2 + 1e-6);
        }
        // Every category shows up over enough rolls
        assert!(state.entities.iter().any(|e| e.kind == EntityKind::Hazard));
        assert!(state.entities.iter().any(|e| e.kind == EntityKind::Benefit));
        assert!(state.entities.iter().any(|e| e.kind == EntityKind::ShieldPickup));
    }

    #[test]
    fn test_spawn_schedule_stays_in_window() {
        let mut state = GameState::new(11, Viewport::default(), 0);
        start(&mut state, Difficulty::Normal);
        for _ in 0..100 {
            let delay = next_spawn_delay(&mut state);
            assert!((500.0..=1400.0).contains(&delay));
        }
    }

    #[test]
    fn test_shield_drop_interval() {
        let mut state = GameState::new(5, Viewport::default(), 0);
        start(&mut state, Difficulty::Normal);
        state.timers.spawn = None;

        run_spawner(&mut state, SHIELD_DROP_INTERVAL_MS - 1.0);
        assert!(state.entities.is_empty());
        run_spawner(&mut state, 1.0);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.entities[0].kind, EntityKind::ShieldPickup);
    }

    #[test]
    fn test_spawn_countdown_fires() {
        let mut state = GameState::new(5, Viewport::default(), 0);
        start(&mut state, Difficulty::Normal);
        // Window max bounds the first delay
        run_spawner(&mut state, 1400.0);
        assert!(!state.entities.is_empty());
    }
}
