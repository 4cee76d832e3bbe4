//! PWM backlight output
//!
//! Drives the backlight LED driver from a PWM channel. The brightness
//! percentage is mapped linearly onto the channel's duty range.

use embedded_hal::pwm::SetDutyCycle;
use horologe_core::traits::Backlight;
use horologe_core::{Brightness, DeviceError};

/// Backlight on a PWM channel
pub struct PwmBacklight<P> {
    pwm: P,
    /// Last level written to the channel
    level: Option<Brightness>,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Create a backlight on `pwm`
    ///
    /// The channel is left as configured by the board until the first
    /// `apply`.
    pub fn new(pwm: P) -> Self {
        Self { pwm, level: None }
    }

    /// Last level applied, if any
    pub fn level(&self) -> Option<Brightness> {
        self.level
    }

    /// Release the PWM channel
    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> Backlight for PwmBacklight<P> {
    fn is_ready(&self) -> bool {
        self.pwm.max_duty_cycle() > 0
    }

    fn apply(&mut self, level: Brightness) -> Result<(), DeviceError> {
        if !self.is_ready() {
            return Err(DeviceError::NotReady);
        }

        // TODO: map onto the FAN5622's 32 brightness steps instead of a
        // linear duty cycle
        let pulse = level.pulse_width(self.pwm.max_duty_cycle());
        self.pwm.set_duty_cycle(pulse).map_err(|_| DeviceError::Bus)?;
        self.level = Some(level);

        Ok(())
    }
}
