//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logging backends
//! - Time (frame deltas)
//! - Pointer/touch input normalization

use crate::consts::MAX_FRAME_DT_MS;
use crate::sim::Avatar;

/// Install the logger for this platform. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(level);
    // `try_init` only fails if a logger was already set
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging(verbose: bool) {
    console_error_panic_hook::set_once();
    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
}

/// Milliseconds on a monotonic clock
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Turns raw frame timestamps into clamped tick deltas
///
/// Used by the runner's `--realtime` mode and by the browser frame callback.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous frame, clamped to `MAX_FRAME_DT_MS`.
    /// The first frame yields zero.
    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let dt = self
            .last_ms
            .map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_FRAME_DT_MS));
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the previous timestamp (after a pause) so no catch-up happens
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Maps pointer and touch positions (viewport-local x) onto an avatar left edge
///
/// A mouse drag keeps the offset at which the avatar was grabbed so it does
/// not snap under the cursor. Touches centre the avatar on the finger.
/// Browser front end only; the result feeds `TickInput::pointer_x`.
#[derive(Debug, Clone, Default)]
pub struct PointerDrag {
    grab_offset: Option<f32>,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    /// Mouse button down at `local_x`
    pub fn press(&mut self, local_x: f32, avatar: &Avatar) -> f32 {
        self.grab_offset = Some(local_x - avatar.x);
        avatar.x
    }

    /// Mouse moved; `None` unless a drag is in progress
    pub fn drag(&self, local_x: f32) -> Option<f32> {
        self.grab_offset.map(|offset| local_x - offset)
    }

    pub fn release(&mut self) {
        self.grab_offset = None;
    }

    /// Touch start/move at `local_x`
    pub fn touch(&self, local_x: f32, avatar: &Avatar) -> f32 {
        local_x - avatar.size / 2.0
    }
}
