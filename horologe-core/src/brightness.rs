//! Backlight brightness

/// Highest brightness, in percent
pub const MAX_PERCENT: u8 = 100;

/// Backlight brightness in percent (0-100)
///
/// `0` is the "backlight off" level used while the display sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brightness(u8);

impl Brightness {
    /// Backlight off
    pub const OFF: Self = Self(0);

    /// Full brightness
    pub const FULL: Self = Self(MAX_PERCENT);

    /// Create a brightness, or `None` if `percent` is above 100
    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= MAX_PERCENT {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Create a brightness, saturating at 100%
    pub const fn clamped(percent: u8) -> Self {
        if percent > MAX_PERCENT {
            Self(MAX_PERCENT)
        } else {
            Self(percent)
        }
    }

    /// Brightness in percent
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Check if this is the "backlight off" level
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// Pulse width for a PWM output whose full period is `period`
    ///
    /// The period is split into 100 equal steps first, so periods that are
    /// not a multiple of 100 never quite reach a 100% duty cycle.
    pub const fn pulse_width(self, period: u16) -> u16 {
        self.0 as u16 * (period / 100)
    }
}
