//! Display controller configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::brightness::Brightness;

/// Brightness used until the user picks one
pub const DEFAULT_BRIGHTNESS_PERCENT: u8 = 30;

/// Delay before the first render tick after waking (ms)
pub const DEFAULT_WAKE_RENDER_DELAY_MS: u32 = 250;

/// Display controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Brightness restored on wake until `set_brightness` is called
    pub default_brightness: Brightness,
    /// Delay from wake to the first render tick (ms)
    pub wake_render_delay_ms: u32,
    /// Whether the power rail is really switched on power on/off
    ///
    /// Simulated boards keep the rail untouched; the state machine still
    /// goes through the powered-off state.
    pub rail_switching: bool,
}

impl DisplayConfig {
    /// Create a configuration
    pub const fn new(
        default_brightness: Brightness,
        wake_render_delay_ms: u32,
        rail_switching: bool,
    ) -> Self {
        Self {
            default_brightness,
            wake_render_delay_ms,
            rail_switching,
        }
    }

    /// Profile for simulated boards without a real regulator
    pub const fn simulator() -> Self {
        Self {
            rail_switching: false,
            ..Self::DEFAULT
        }
    }

    const DEFAULT: Self = Self::new(
        Brightness::clamped(DEFAULT_BRIGHTNESS_PERCENT),
        DEFAULT_WAKE_RENDER_DELAY_MS,
        true,
    );
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.default_brightness.percent(), 30);
        assert_eq!(config.wake_render_delay_ms, 250);
        assert!(config.rail_switching);
    }

    #[test]
    fn test_simulator_profile() {
        let config = DisplayConfig::simulator();
        assert!(!config.rail_switching);
        assert_eq!(config.default_brightness, DisplayConfig::default().default_brightness);
    }
}
