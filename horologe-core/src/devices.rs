//! Display peripheral bundle
//!
//! Groups the four peripherals the display controller drives so boards can
//! hand them over in one piece, with absent ones filled in by a stand-in.

use heapless::Vec;

use crate::traits::{Backlight, DisplayPanel, PowerManagedDevice, PowerRail};

/// Peripherals involved in display power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceKind {
    /// Display panel controller
    Display,
    /// Backlight PWM output
    Backlight,
    /// Display supply regulator
    PowerRail,
    /// Touch controller
    Touch,
}

/// Result of probing the display peripherals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeReport {
    missing: Vec<DeviceKind, 4>,
}

impl ProbeReport {
    /// Check if every peripheral is ready
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Check if a peripheral was found not ready
    pub fn is_missing(&self, kind: DeviceKind) -> bool {
        self.missing.contains(&kind)
    }

    /// Peripherals that were not ready, in probe order
    pub fn missing(&self) -> &[DeviceKind] {
        &self.missing
    }

    fn record(&mut self, kind: DeviceKind, ready: bool) {
        if !ready {
            // Capacity matches the number of DeviceKind variants
            let _ = self.missing.push(kind);
        }
    }
}

/// The display peripherals, owned by the display controller
pub struct DisplayDevices<B, P, D, T> {
    /// Backlight output
    pub backlight: B,
    /// Display supply rail
    pub rail: P,
    /// Display panel
    pub display: D,
    /// Touch controller
    pub touch: T,
}

impl<B, P, D, T> DisplayDevices<B, P, D, T>
where
    B: Backlight,
    P: PowerRail,
    D: DisplayPanel,
    T: PowerManagedDevice,
{
    /// Bundle the display peripherals
    pub const fn new(backlight: B, rail: P, display: D, touch: T) -> Self {
        Self {
            backlight,
            rail,
            display,
            touch,
        }
    }

    /// Check which peripherals are ready
    ///
    /// Missing devices are logged but never fatal: the controller skips
    /// the side effects that need them.
    pub fn probe(&self) -> ProbeReport {
        let mut report = ProbeReport::default();

        report.record(DeviceKind::Display, self.display.is_ready());
        report.record(DeviceKind::Backlight, self.backlight.is_ready());
        report.record(DeviceKind::PowerRail, self.rail.is_ready());
        report.record(DeviceKind::Touch, self.touch.is_ready());

        #[cfg(feature = "defmt")]
        for kind in report.missing() {
            match kind {
                DeviceKind::Display => defmt::error!("Display device not ready"),
                DeviceKind::Backlight => defmt::warn!("Display brightness control not supported"),
                DeviceKind::PowerRail => defmt::warn!("Display regulator control not supported"),
                DeviceKind::Touch => defmt::warn!("Touch device not ready"),
            }
        }

        report
    }
}
