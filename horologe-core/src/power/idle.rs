//! Inactivity timeout model
//!
//! Pure bookkeeping: the caller supplies a free-running millisecond clock
//! and acts on the returned transitions. Timestamps may wrap around.

use crate::config::IdleConfig;
use crate::state::DisplayRequest;

/// Watch activity states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivityState {
    /// User is interacting, display on
    Active,
    /// Idle timeout expired, display off
    Inactive,
    /// Watch is lying still off the wrist; display stays off
    NotWornStationary,
}

impl ActivityState {
    /// Check if the display should be awake in this state
    pub fn display_on(&self) -> bool {
        matches!(self, ActivityState::Active)
    }
}

/// An activity state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityTransition {
    pub from: ActivityState,
    pub to: ActivityState,
}

impl ActivityTransition {
    /// Display request needed to follow this transition, if any
    pub fn display_request(&self) -> Option<DisplayRequest> {
        match (self.from.display_on(), self.to.display_on()) {
            (false, true) => Some(DisplayRequest::Wake),
            (true, false) => Some(DisplayRequest::Sleep),
            _ => None,
        }
    }
}

/// Inactivity manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleManager {
    config: IdleConfig,
    state: ActivityState,
    last_activity_ms: u32,
}

impl IdleManager {
    /// Create a manager that starts active at `now_ms`
    pub const fn new(config: IdleConfig, now_ms: u32) -> Self {
        Self {
            config,
            state: ActivityState::Active,
            last_activity_ms: now_ms,
        }
    }

    /// Current activity state
    pub const fn state(&self) -> ActivityState {
        self.state
    }

    /// Configuration in use
    pub const fn config(&self) -> &IdleConfig {
        &self.config
    }

    /// Record user activity
    ///
    /// Returns a transition if the activity woke the watch.
    pub fn record_activity(&mut self, now_ms: u32) -> Option<ActivityTransition> {
        self.last_activity_ms = now_ms;
        self.set_state(ActivityState::Active)
    }

    /// Restart the inactivity timeout
    ///
    /// Returns `true` if this call woke the watch from an inactive state.
    /// Input handlers use this to swallow the press that woke the screen.
    pub fn reset_idle_timeout(&mut self, now_ms: u32) -> bool {
        self.record_activity(now_ms).is_some()
    }

    /// Milliseconds until the watch goes inactive (0 when not active)
    pub fn ms_to_inactive(&self, now_ms: u32) -> u32 {
        match self.state {
            ActivityState::Active => self
                .config
                .idle_timeout_ms
                .saturating_sub(now_ms.wrapping_sub(self.last_activity_ms)),
            _ => 0,
        }
    }

    /// Report whether the watch is worn
    ///
    /// Taking the watch off forces it inactive. Putting it back on does not
    /// wake it; that takes user activity.
    pub fn set_not_worn(&mut self, not_worn: bool) -> Option<ActivityTransition> {
        match (not_worn, self.state) {
            (true, _) => self.set_state(ActivityState::NotWornStationary),
            (false, ActivityState::NotWornStationary) => self.set_state(ActivityState::Inactive),
            (false, _) => None,
        }
    }

    /// Evaluate the idle timeout
    ///
    /// `keep_awake` (e.g. charging with the charge screen enabled) holds
    /// the watch active and restarts the timeout.
    pub fn poll(&mut self, now_ms: u32, keep_awake: bool) -> Option<ActivityTransition> {
        if keep_awake {
            return self.record_activity(now_ms);
        }

        let idle_ms = now_ms.wrapping_sub(self.last_activity_ms);
        if self.state == ActivityState::Active && idle_ms >= self.config.idle_timeout_ms {
            return self.set_state(ActivityState::Inactive);
        }

        None
    }

    fn set_state(&mut self, to: ActivityState) -> Option<ActivityTransition> {
        if to == self.state {
            return None;
        }

        let from = self.state;
        self.state = to;
        Some(ActivityTransition { from, to })
    }
}
