//! Backlight brightness output

use crate::brightness::Brightness;
use crate::error::DeviceError;

/// Trait for a backlight driven by a pulse-width signal
///
/// Implementations translate the brightness into whatever the LED driver
/// needs (PWM duty, single-wire pulse count, ...). The driver keeps no state
/// beyond the last applied level.
pub trait Backlight {
    /// Check if the backlight output exists and is initialized
    fn is_ready(&self) -> bool;

    /// Drive the backlight at `level`
    ///
    /// Returns `DeviceError::NotReady` without touching hardware when the
    /// output is not ready.
    fn apply(&mut self, level: Brightness) -> Result<(), DeviceError>;
}
