//! Collision detection and effects
//!
//! Runs once per frame after motion, so every test sees post-motion
//! positions. Overlap is inclusive: boxes that merely touch collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{EntityKind, GameEvent, GameState};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box with top-left corner `origin` and extent `size`
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// True unless the boxes are strictly separated on some axis
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(other.min.x > self.max.x
            || other.max.x < self.min.x
            || other.min.y > self.max.y
            || other.max.y < self.min.y)
    }
}

/// Outcome of a single avatar/entity contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Damaged,
    Blocked,
    Healed,
    Shielded,
}

/// Resolve every avatar/entity overlap, applying effects and marking consumed
/// entities removed. Stops at the hit that ends the session.
pub fn resolve_collisions(state: &mut GameState) -> Vec<Contact> {
    let avatar = state.avatar.bounds();
    let mut contacts = Vec::new();

    for i in 0..state.entities.len() {
        let entity = &state.entities[i];
        if entity.removed || !avatar.overlaps(&entity.bounds()) {
            continue;
        }
        let kind = entity.kind;
        state.entities[i].removed = true;

        let contact = match kind {
            EntityKind::Hazard => {
                if state.is_shielded() {
                    state.events.push(GameEvent::HazardBlocked);
                    Contact::Blocked
                } else {
                    change_health(state, -HEALTH_STEP);
                    Contact::Damaged
                }
            }
            EntityKind::Benefit => {
                change_health(state, HEALTH_STEP);
                Contact::Healed
            }
            EntityKind::ShieldPickup => {
                let refreshed = state.shield.grant(state.now_ms);
                log::info!(
                    "Shield {} ({}s)",
                    if refreshed { "refreshed" } else { "up" },
                    SHIELD_DURATION_MS / 1000.0
                );
                state.events.push(GameEvent::ShieldGained { refreshed });
                Contact::Shielded
            }
        };
        contacts.push(contact);

        if state.health == 0 {
            super::session::game_over(state);
            break;
        }
    }

    contacts
}

/// Apply a clamped health delta and raise the flash event
pub fn change_health(state: &mut GameState, delta: i16) {
    let health = (state.health as i16 + delta).clamp(0, MAX_HEALTH as i16) as u8;
    let applied = health as i16 - state.health as i16;
    state.health = health;
    log::debug!("Health {:+} -> {}", applied, health);
    state.events.push(GameEvent::HealthChanged {
        delta: applied,
        health,
    });
}
