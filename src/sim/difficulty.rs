//! Difficulty profiles
//!
//! A profile is picked once when a session starts and never changes until the
//! next start. The spawn window it seeds is copied into the session so level
//! ups can tighten it without touching the profile.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// The concrete parameters for this preset
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                spawn_interval_min_ms: 700.0,
                spawn_interval_max_ms: 1600.0,
                benefit_probability: 0.6,
                shield_probability: 0.08,
                speed_factor: 0.9,
            },
            Difficulty::Normal => DifficultyProfile {
                spawn_interval_min_ms: 500.0,
                spawn_interval_max_ms: 1400.0,
                benefit_probability: 0.45,
                shield_probability: 0.08,
                speed_factor: 1.0,
            },
            Difficulty::Hard => DifficultyProfile {
                spawn_interval_min_ms: 350.0,
                spawn_interval_max_ms: 1100.0,
                benefit_probability: 0.3,
                shield_probability: 0.06,
                speed_factor: 1.2,
            },
        }
    }
}

/// Immutable per-session tuning record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub spawn_interval_min_ms: f64,
    pub spawn_interval_max_ms: f64,
    pub benefit_probability: f32,
    pub shield_probability: f32,
    pub speed_factor: f32,
}

impl DifficultyProfile {
    pub fn spawn_window(&self) -> SpawnWindow {
        SpawnWindow {
            min_ms: self.spawn_interval_min_ms,
            max_ms: self.spawn_interval_max_ms,
        }
    }
}

/// Current bounds for the randomized delay between spawns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnWindow {
    pub min_ms: f64,
    pub max_ms: f64,
}

impl SpawnWindow {
    /// Pick a delay from the window given a unit draw in `[0, 1)`
    pub fn delay_for(&self, unit: f64) -> f64 {
        let span = (self.max_ms - self.min_ms).max(0.0);
        (self.min_ms + unit * span).max(SPAWN_DELAY_FLOOR_MS)
    }

    /// Shrink the window after a level up, respecting the floors
    pub fn tighten(&mut self) {
        self.min_ms = (self.min_ms * SPAWN_MIN_TIGHTEN)
            .round()
            .max(SPAWN_MIN_FLOOR_MS);
        self.max_ms = (self.max_ms * SPAWN_MAX_TIGHTEN)
            .round()
            .max(SPAWN_MAX_FLOOR_MS);
    }
}
