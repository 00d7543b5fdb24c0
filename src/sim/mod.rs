//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives through `tick`'s `dt`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod progression;
pub mod session;
pub mod shield;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Aabb, Contact, resolve_collisions};
pub use difficulty::{Difficulty, DifficultyProfile, SpawnWindow};
pub use session::{pause, resume, start, toggle_pause};
pub use shield::Shield;
pub use snapshot::{EntityView, Snapshot};
pub use state::{
    Avatar, BENEFIT_GLYPHS, Direction, EntityKind, FallingEntity, GameEvent, GameState,
    HAZARD_GLYPHS, SHIELD_GLYPH, SessionPhase, Viewport,
};
pub use tick::{TickInput, tick};
pub use timer::{Countdown, Interval, Timers};
