//! Scroll-position tracking.
//!
//! Everything downstream of the scroll listener works in terms of a single
//! normalized progress scalar; this module owns its derivation and the
//! optional one-way latch that commits the page to its fully-revealed state.

use crate::constants::LOCK_COMMIT_THRESHOLD;

/// Normalize a scroll offset against the driving container's scrollable range.
///
/// The denominator is clamped to at least 1 px so a container shorter than the
/// viewport yields 0 instead of dividing by zero (or a negative range).
pub fn scroll_progress(scroll_top: f64, drive_height: f64, viewport_height: f64) -> f32 {
    let range = (drive_height - viewport_height).max(1.0);
    (scroll_top / range).clamp(0.0, 1.0) as f32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchState {
    Tracking,
    Locked,
}

#[derive(Clone, Copy, Debug)]
pub struct LatchConfig {
    pub enabled: bool,
    /// Raw progress beyond which the scene commits to fully revealed.
    pub commit_threshold: f32,
}

impl Default for LatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            commit_threshold: LOCK_COMMIT_THRESHOLD,
        }
    }
}

/// Latest raw progress plus the latch state machine.
///
/// While `Locked`, `effective()` pins at 1.0 no matter where the page actually
/// sits; only an explicit [`reset`](Self::reset) (the nav-logo gesture)
/// returns to live tracking.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    raw: f32,
    state: LatchState,
    config: LatchConfig,
}

impl ScrollTracker {
    pub fn new(config: LatchConfig) -> Self {
        Self {
            raw: 0.0,
            state: LatchState::Tracking,
            config,
        }
    }

    pub fn set_raw(&mut self, progress: f32) {
        self.raw = progress.clamp(0.0, 1.0);
        if self.config.enabled
            && self.state == LatchState::Tracking
            && self.raw > self.config.commit_threshold
        {
            self.state = LatchState::Locked;
        }
    }

    pub fn raw(&self) -> f32 {
        self.raw
    }

    pub fn effective(&self) -> f32 {
        match self.state {
            LatchState::Locked => 1.0,
            LatchState::Tracking => self.raw,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state == LatchState::Locked
    }

    /// Unlock and drop back to the top of the range.
    pub fn reset(&mut self) {
        self.state = LatchState::Tracking;
        self.raw = 0.0;
    }
}
