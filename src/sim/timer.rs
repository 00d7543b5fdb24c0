//! Cooperative timers driven by simulation time
//!
//! Nothing here reads a wall clock. Every timer is advanced explicitly by the
//! tick with the same `dt` the frame uses, so a session replays identically
//! for a given seed and input sequence.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Time remaining until a one-shot deadline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_ms: f64,
}

impl Countdown {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            remaining_ms: delay_ms,
        }
    }

    pub fn remaining_ms(&self) -> f64 {
        self.remaining_ms
    }

    /// Let `dt_ms` pass
    pub fn elapse(&mut self, dt_ms: f64) {
        self.remaining_ms -= dt_ms;
    }

    pub fn is_due(&self) -> bool {
        self.remaining_ms <= 0.0
    }

    /// Schedule the next deadline relative to the one that just fired.
    /// Overshoot from a long frame carries into the new deadline.
    pub fn rearm(&mut self, delay_ms: f64) {
        self.remaining_ms += delay_ms;
    }
}

/// Fixed-period repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    period_ms: f64,
    countdown: Countdown,
}

impl Interval {
    /// A fresh interval; the first fire is one full period away
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            countdown: Countdown::new(period_ms),
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    pub fn remaining_ms(&self) -> f64 {
        self.countdown.remaining_ms()
    }

    /// Advance by `dt_ms` and return how many periods completed
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.countdown.elapse(dt_ms);
        let mut fired = 0;
        while self.countdown.is_due() {
            fired += 1;
            self.countdown.rearm(self.period_ms);
        }
        fired
    }
}

/// Every timer a running session owns
///
/// `None` means cancelled. Pausing and game over cancel everything; resuming
/// arms fresh intervals with no partial credit carried over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timers {
    pub score: Option<Interval>,
    pub ramp: Option<Interval>,
    pub level: Option<Interval>,
    pub shield_drop: Option<Interval>,
    pub spawn: Option<Countdown>,
}

impl Timers {
    /// Arm every timer with a full interval; the spawn schedule starts at
    /// `first_spawn_ms`
    pub fn arm(&mut self, first_spawn_ms: f64) {
        self.score = Some(Interval::new(SCORE_INTERVAL_MS));
        self.ramp = Some(Interval::new(RAMP_INTERVAL_MS));
        self.level = Some(Interval::new(LEVEL_INTERVAL_MS));
        self.shield_drop = Some(Interval::new(SHIELD_DROP_INTERVAL_MS));
        self.spawn = Some(Countdown::new(first_spawn_ms));
    }

    pub fn cancel_all(&mut self) {
        *self = Self::default();
    }

    /// True when no timer is pending
    pub fn is_quiescent(&self) -> bool {
        self.score.is_none()
            && self.ramp.is_none()
            && self.level.is_none()
            && self.shield_drop.is_none()
            && self.spawn.is_none()
    }
}

/// Drain an optional interval, returning the number of fires (0 if cancelled)
pub fn fires(interval: &mut Option<Interval>, dt_ms: f64) -> u32 {
    interval.as_mut().map_or(0, |i| i.advance(dt_ms))
}
