//! Game settings and preferences
//!
//! Persisted as JSON next to the best score.

use serde::{Deserialize, Serialize};

use crate::persistence::{Result, Storage};
use crate::sim::Difficulty;

/// Avatar glyphs offered on the start screen
pub const AVATAR_GLYPHS: [&str; 4] = ["🚀", "🐱", "🐸", "🤖"];

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty used for the next start
    pub difficulty: Difficulty,
    /// Avatar glyph (cosmetic only, drawn by the front end)
    pub avatar: String,

    // === HUD ===
    /// Show the shield seconds counter (front end HUD)
    pub show_shield_timer: bool,

    // === Accessibility ===
    /// Reduced motion (skip hit flash and level banners)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            avatar: AVATAR_GLYPHS[0].to_string(),
            show_shield_timer: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "emojiEscapeSettings";

    /// Whether the front end should flash on `HealthChanged` (respects reduced_motion)
    pub fn effective_hit_flash(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable settings: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<()> {
        let json = serde_json::to_string(self)?;
        storage.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
