//! Shield power-up state machine
//!
//! `Down -> Active -> Down`, re-entrant: a pickup while active restarts the
//! full duration instead of stacking. Pausing freezes the remainder in
//! `Suspended` so paused wall time never counts against it.

use serde::{Deserialize, Serialize};

use crate::consts::SHIELD_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Shield {
    #[default]
    Down,
    /// Protecting until the session clock reaches `expires_at_ms`
    Active { expires_at_ms: f64 },
    /// Frozen by a pause with this much protection left
    Suspended { remaining_ms: f64 },
}

impl Shield {
    /// Start or refresh the shield. Returns true if it was already up.
    pub fn grant(&mut self, now_ms: f64) -> bool {
        let refreshed = !matches!(self, Shield::Down);
        *self = Shield::Active {
            expires_at_ms: now_ms + SHIELD_DURATION_MS,
        };
        refreshed
    }

    pub fn is_up(&self, now_ms: f64) -> bool {
        match *self {
            Shield::Down => false,
            Shield::Active { expires_at_ms } => now_ms < expires_at_ms,
            Shield::Suspended { remaining_ms } => remaining_ms > 0.0,
        }
    }

    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        match *self {
            Shield::Down => 0.0,
            Shield::Active { expires_at_ms } => (expires_at_ms - now_ms).max(0.0),
            Shield::Suspended { remaining_ms } => remaining_ms,
        }
    }

    /// Remaining protection rounded to whole seconds for display
    pub fn remaining_secs(&self, now_ms: f64) -> u32 {
        (self.remaining_ms(now_ms) / 1000.0).round() as u32
    }

    /// Drop the shield once its deadline has passed. Returns true on expiry.
    pub fn expire_if_due(&mut self, now_ms: f64) -> bool {
        match *self {
            Shield::Active { expires_at_ms } if now_ms >= expires_at_ms => {
                *self = Shield::Down;
                true
            }
            _ => false,
        }
    }

    /// Freeze the remaining duration (pause)
    pub fn suspend(&mut self, now_ms: f64) {
        if let Shield::Active { expires_at_ms } = *self {
            let remaining_ms = (expires_at_ms - now_ms).max(0.0);
            *self = if remaining_ms > 0.0 {
                Shield::Suspended { remaining_ms }
            } else {
                Shield::Down
            };
        }
    }

    /// Reschedule a frozen shield from the new start time (resume)
    pub fn restore(&mut self, now_ms: f64) {
        if let Shield::Suspended { remaining_ms } = *self {
            *self = Shield::Active {
                expires_at_ms: now_ms + remaining_ms,
            };
        }
    }

    pub fn clear(&mut self) {
        *self = Shield::Down;
    }
}
