//! Stand-in for peripherals a board does not have
//!
//! Boards without a switchable regulator, touch controller, or backlight
//! control pass `Absent` in that slot. Every operation reports
//! `DeviceError::NotReady`, which the display controller logs and skips.

use horologe_core::traits::{Backlight, DisplayPanel, PowerManagedDevice, PowerRail};
use horologe_core::{Brightness, DeviceError};

/// A peripheral that is not fitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Absent;

impl Backlight for Absent {
    fn is_ready(&self) -> bool {
        false
    }

    fn apply(&mut self, _level: Brightness) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady)
    }
}

impl PowerRail for Absent {
    fn is_ready(&self) -> bool {
        false
    }

    fn enable(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady)
    }

    fn disable(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady)
    }
}

impl PowerManagedDevice for Absent {
    fn is_ready(&self) -> bool {
        false
    }

    fn suspend(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady)
    }

    fn resume(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady)
    }

    fn turn_on(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady)
    }

    fn turn_off(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady)
    }
}

impl DisplayPanel for Absent {
    fn set_blanking(&mut self, _blank: bool) -> Result<(), DeviceError> {
        Err(DeviceError::NotReady)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horologe_core::devices::{DeviceKind, DisplayDevices};

    #[test]
    fn test_every_operation_not_ready() {
        let mut absent = Absent;

        assert_eq!(Backlight::apply(&mut absent, Brightness::FULL), Err(DeviceError::NotReady));
        assert_eq!(PowerRail::enable(&mut absent), Err(DeviceError::NotReady));
        assert_eq!(absent.set_blanking(true), Err(DeviceError::NotReady));
        assert_eq!(absent.suspend(), Err(DeviceError::NotReady));
        assert_eq!(absent.resume(), Err(DeviceError::NotReady));
        assert_eq!(absent.turn_on(), Err(DeviceError::NotReady));
        assert_eq!(absent.turn_off(), Err(DeviceError::NotReady));
    }

    #[test]
    fn test_probe_reports_absent() {
        let devices = DisplayDevices::new(Absent, Absent, Absent, Absent);
        let report = devices.probe();

        assert_eq!(
            report.missing(),
            &[
                DeviceKind::Display,
                DeviceKind::Backlight,
                DeviceKind::PowerRail,
                DeviceKind::Touch
            ]
        );
    }
}
