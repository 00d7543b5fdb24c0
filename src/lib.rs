//! Emoji Escape - a falling-object dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, session state)
//! - `platform`: Browser/native platform abstraction (logging, time, pointer input)
//! - `persistence`: Key/value storage for the best score and settings
//! - `best_score`: Single best-score record
//! - `settings`: Player preferences

pub mod best_score;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use best_score::BestScore;
pub use settings::Settings;

/// Game configuration constants
///
/// Times are in milliseconds, distances in viewport pixels, speeds in px/ms.
pub mod consts {
    /// Fixed step used by the headless runner (60 Hz)
    pub const FRAME_DT_MS: f64 = 1000.0 / 60.0;
    /// Largest frame delta a driver should feed a single tick
    pub const MAX_FRAME_DT_MS: f64 = 100.0;

    /// Avatar horizontal speed
    pub const AVATAR_SPEED: f32 = 0.45;
    /// Avatar size as a fraction of viewport height
    pub const AVATAR_SIZE_FRACTION: f32 = 0.06;
    /// Gap between avatar and the bottom edge, as a fraction of viewport height
    pub const AVATAR_BOTTOM_MARGIN_FRACTION: f32 = 0.03;

    /// Falling entity size as a fraction of viewport height (5vh)
    pub const ENTITY_SIZE_FRACTION: f32 = 0.05;
    /// Entities appear this far above the top edge
    pub const ENTITY_SPAWN_OFFSET: f32 = 40.0;
    /// Entities are discarded once this far below the bottom edge
    pub const ENTITY_DESPAWN_MARGIN: f32 = 50.0;
    /// Base fall speed range before the difficulty speed factor
    pub const ENTITY_MIN_SPEED: f32 = 0.045;
    pub const ENTITY_MAX_SPEED: f32 = 0.115;

    /// Spawn delay never drops below this
    pub const SPAWN_DELAY_FLOOR_MS: f64 = 80.0;
    /// Level-up tightening factors and floors for the spawn window
    pub const SPAWN_MIN_TIGHTEN: f64 = 0.92;
    pub const SPAWN_MAX_TIGHTEN: f64 = 0.94;
    pub const SPAWN_MIN_FLOOR_MS: f64 = 120.0;
    pub const SPAWN_MAX_FLOOR_MS: f64 = 300.0;

    /// Periodic progression intervals
    pub const SCORE_INTERVAL_MS: f64 = 1_000.0;
    pub const RAMP_INTERVAL_MS: f64 = 10_000.0;
    pub const LEVEL_INTERVAL_MS: f64 = 60_000.0;
    /// A shield pickup is dropped on this interval regardless of the spawn roll
    pub const SHIELD_DROP_INTERVAL_MS: f64 = 45_000.0;

    /// Speed multiplier step per ramp tick and per level (scaled by speed factor)
    pub const RAMP_STEP: f32 = 0.3;
    pub const LEVEL_SPEED_STEP: f32 = 0.6;
    /// Number of distinct level visuals before they repeat
    pub const VISUAL_LEVEL_COUNT: u32 = 10;

    /// Health
    pub const MAX_HEALTH: u8 = 100;
    pub const HEALTH_STEP: i16 = 10;

    /// Shield power-up duration
    pub const SHIELD_DURATION_MS: f64 = 30_000.0;
    /// Countdown shown after the shield wears off
    pub const SHIELD_LOST_COUNTDOWN_SECS: u32 = 3;
}
