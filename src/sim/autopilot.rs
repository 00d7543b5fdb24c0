//! Idle/demo mode steering
//!
//! Dodges the closest hazard heading for the avatar; otherwise chases the
//! most useful pickup. Only reads state, so it never disturbs determinism.

use super::state::{Direction, EntityKind, GameState};
use crate::consts::MAX_HEALTH;

/// How far above the avatar a hazard counts as a threat
const LOOKAHEAD: f32 = 220.0;
/// Extra horizontal clearance kept around the avatar
const CLEARANCE: f32 = 12.0;
/// Close enough to a target to stop
const DEADZONE: f32 = 4.0;

pub fn steer(state: &GameState) -> Direction {
    let avatar = &state.avatar;
    let left = avatar.x - CLEARANCE;
    let right = avatar.x + avatar.size + CLEARANCE;
    let center = avatar.center_x();

    if !state.is_shielded() {
        let threat = state
            .entities
            .iter()
            .filter(|e| !e.removed && e.kind == EntityKind::Hazard)
            .filter(|e| {
                e.pos.y + e.size >= avatar.y - LOOKAHEAD && e.pos.y <= avatar.y + avatar.size
            })
            .filter(|e| e.pos.x + e.size >= left && e.pos.x <= right)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        if let Some(threat) = threat {
            let threat_center = threat.pos.x + threat.size / 2.0;
            let mut dodge = if threat_center < center {
                Direction::Right
            } else {
                Direction::Left
            };
            // Pinned against a wall: run past the hazard instead
            if dodge == Direction::Right && avatar.x >= avatar.max_x {
                dodge = Direction::Left;
            } else if dodge == Direction::Left && avatar.x <= 0.0 {
                dodge = Direction::Right;
            }
            return dodge;
        }
    }

    let wants_shield = !state.is_shielded();
    let wants_health = state.health < MAX_HEALTH;
    let target = state
        .entities
        .iter()
        .filter(|e| !e.removed && e.pos.y <= avatar.y + avatar.size)
        .filter(|e| match e.kind {
            EntityKind::ShieldPickup => wants_shield,
            EntityKind::Benefit => wants_health,
            EntityKind::Hazard => false,
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    match target {
        Some(target) => {
            let target_center = target.pos.x + target.size / 2.0;
            if target_center < center - DEADZONE {
                Direction::Left
            } else if target_center > center + DEADZONE {
                Direction::Right
            } else {
                Direction::Still
            }
        }
        None => Direction::Still,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{FallingEntity, Viewport};
    use crate::sim::{Difficulty, start};
    use glam::Vec2;

    fn with_entity(kind: EntityKind, dx: f32, dy: f32) -> GameState {
        let mut state = GameState::new(1, Viewport::new(600.0, 1000.0), 0);
        start(&mut state, Difficulty::Normal);
        let id = state.next_entity_id();
        let pos = Vec2::new(state.avatar.x + dx, state.avatar.y + dy);
        state.entities.push(FallingEntity {
            id,
            pos,
            fall_speed: 0.1,
            kind,
            variant: 0,
            size: 50.0,
            removed: false,
        });
        state
    }

    #[test]
    fn test_dodges_hazard_overhead() {
        // Hazard slightly left of centre: move right
        let state = with_entity(EntityKind::Hazard, -10.0, -100.0);
        assert_eq!(steer(&state), Direction::Right);

        let state = with_entity(EntityKind::Hazard, 30.0, -100.0);
        assert_eq!(steer(&state), Direction::Left);
    }

    #[test]
    fn test_ignores_far_hazard() {
        let state = with_entity(EntityKind::Hazard, 0.0, -600.0);
        assert_eq!(steer(&state), Direction::Still);
    }

    #[test]
    fn test_chases_shield() {
        let state = with_entity(EntityKind::ShieldPickup, 200.0, -300.0);
        assert_eq!(steer(&state), Direction::Right);
    }

    #[test]
    fn test_full_health_ignores_benefit() {
        let state = with_entity(EntityKind::Benefit, -200.0, -300.0);
        assert_eq!(steer(&state), Direction::Still);

        let mut state = with_entity(EntityKind::Benefit, -200.0, -300.0);
        state.health = 50;
        assert_eq!(steer(&state), Direction::Left);
    }
}
