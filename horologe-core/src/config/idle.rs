//! Inactivity handling configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time without user activity before the watch goes inactive (ms)
pub const DEFAULT_IDLE_TIMEOUT_MS: u32 = 20_000;

/// How often the idle loop re-evaluates the timeout (ms)
pub const DEFAULT_IDLE_POLL_MS: u32 = 500;

/// Inactivity manager configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdleConfig {
    /// Idle time before going inactive (ms)
    pub idle_timeout_ms: u32,
    /// Idle loop evaluation period (ms)
    pub poll_interval_ms: u32,
    /// Keep the display on while the battery charges
    pub stay_awake_while_charging: bool,
}

impl IdleConfig {
    /// Create a configuration
    pub const fn new(
        idle_timeout_ms: u32,
        poll_interval_ms: u32,
        stay_awake_while_charging: bool,
    ) -> Self {
        Self {
            idle_timeout_ms,
            poll_interval_ms,
            stay_awake_while_charging,
        }
    }
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_IDLE_POLL_MS, false)
    }
}
