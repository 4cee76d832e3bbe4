//! GPIO power rail
//!
//! Display supply switched by a load switch or LDO enable pin.

use embedded_hal::digital::OutputPin;
use horologe_core::traits::PowerRail;
use horologe_core::DeviceError;

/// Power rail controlled by a GPIO enable pin
///
/// The pin can be active-high (default) or active-low. The rail is assumed
/// on at construction, as left by the bootloader.
pub struct GpioPowerRail<P> {
    pin: P,
    /// If true, rail ON = pin LOW
    inverted: bool,
    /// Current logical state (true = rail on)
    enabled: bool,
}

impl<P: OutputPin> GpioPowerRail<P> {
    /// Create a new GPIO power rail
    ///
    /// # Arguments
    /// - `pin`: The enable pin
    /// - `inverted`: If true, the rail is on when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            pin,
            inverted,
            enabled: true,
        }
    }

    /// Create a rail with an active-high enable
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a rail with an active-low enable
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Check if the rail is currently on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, on: bool) -> Result<(), DeviceError> {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| DeviceError::Bus)?;
        self.enabled = on;

        Ok(())
    }
}

impl<P: OutputPin> PowerRail for GpioPowerRail<P> {
    fn is_ready(&self) -> bool {
        true
    }

    fn enable(&mut self) -> Result<(), DeviceError> {
        self.set_enabled(true)
    }

    fn disable(&mut self) -> Result<(), DeviceError> {
        self.set_enabled(false)
    }
}
