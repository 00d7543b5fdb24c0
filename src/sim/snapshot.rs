//! Presentation snapshot
//!
//! A plain, serializable view of everything the rendering layer needs for one
//! frame. Simulation entities never carry presentation handles; the renderer
//! rebuilds its view from this each frame.

use serde::{Deserialize, Serialize};

use super::state::{EntityKind, GameState, SessionPhase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub kind: EntityKind,
    pub glyph: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub avatar_x: f32,
    pub avatar_y: f32,
    pub avatar_size: f32,
    pub entities: Vec<EntityView>,
    pub health_percent: u8,
    pub score: u64,
    pub best_score: u64,
    pub level: u32,
    pub visual_level: u32,
    pub shielded: bool,
    /// Whole seconds of shield left (0 when down)
    pub shield_secs: u32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            avatar_x: state.avatar.x,
            avatar_y: state.avatar.y,
            avatar_size: state.avatar.size,
            entities: state
                .entities
                .iter()
                .filter(|e| !e.removed)
                .map(|e| EntityView {
                    id: e.id,
                    x: e.pos.x,
                    y: e.pos.y,
                    size: e.size,
                    kind: e.kind,
                    glyph: e.glyph().to_string(),
                })
                .collect(),
            health_percent: state.health_percent(),
            score: state.score,
            best_score: state.best_score,
            level: state.level,
            visual_level: state.visual_level(),
            shielded: state.is_shielded(),
            shield_secs: state.shield.remaining_secs(state.now_ms),
        }
    }
}
