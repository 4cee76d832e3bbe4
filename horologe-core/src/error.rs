//! Error types for display power control

use core::fmt;

/// Result of a rejected display state request
///
/// Neither variant is fatal. The caller decides whether and when to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The request matches the current state, or is not valid from it
    /// (power off while awake). Nothing was done.
    AlreadyInState,
    /// The display is fully powered off; power it on before sleep/wake
    DeviceOff,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInState => write!(f, "display already in requested state"),
            Self::DeviceOff => write!(f, "display is powered off"),
        }
    }
}

/// Errors reported by a hardware adapter
///
/// The display controller never aborts a transition on these; the side
/// effect is skipped and a warning logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// Device not present on this board or not initialized
    NotReady,
    /// Bus or peripheral error while driving the device
    Bus,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "device not ready"),
            Self::Bus => write!(f, "device bus error"),
        }
    }
}
