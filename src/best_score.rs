//! Best score record
//!
//! A single integer under one key, stored as plain text so older saves stay
//! readable.

use crate::persistence::{Result, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore {
    pub score: u64,
}

impl BestScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "emojiEscapeBest";

    pub fn new(score: u64) -> Self {
        Self { score }
    }

    /// Take `score` if it beats the current best. Returns true if it did.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.score {
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Load from storage; a missing or unreadable value counts as zero
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match raw.trim().parse::<u64>() {
                Ok(score) => {
                    log::info!("Loaded best score {}", score);
                    Self { score }
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt best score {:?}: {}", raw, e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read best score: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<()> {
        storage.set(Self::STORAGE_KEY, &self.score.to_string())?;
        log::info!("Best score saved ({})", self.score);
        Ok(())
    }
}
