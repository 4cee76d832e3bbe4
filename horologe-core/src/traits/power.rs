//! Power rail and device power management traits

use crate::error::DeviceError;

/// Device operations, as reported when one fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceAction {
    /// Enter low-power mode, keeping configuration
    Suspend,
    /// Leave low-power mode
    Resume,
    /// Supply came up, device needs (re)initialization
    TurnOn,
    /// Supply is about to go away
    TurnOff,
    /// Show or hide the framebuffer
    Blanking,
    /// Switch the supply rail
    Rail,
    /// Set the backlight level
    Backlight,
}

/// Trait for a switchable supply rail
///
/// Boards without a controllable regulator report `is_ready() == false`.
pub trait PowerRail {
    /// Check if the rail can be switched
    fn is_ready(&self) -> bool;

    /// Switch the rail on
    fn enable(&mut self) -> Result<(), DeviceError>;

    /// Switch the rail off
    fn disable(&mut self) -> Result<(), DeviceError>;
}

/// Trait for a peripheral with power management hooks
///
/// Used for both the display panel and the touch controller.
pub trait PowerManagedDevice {
    /// Check if the device is present and initialized
    fn is_ready(&self) -> bool;

    /// Put the device in its low-power mode
    fn suspend(&mut self) -> Result<(), DeviceError>;

    /// Bring the device back from low-power mode
    fn resume(&mut self) -> Result<(), DeviceError>;

    /// Notify the device that its supply came up
    fn turn_on(&mut self) -> Result<(), DeviceError>;

    /// Notify the device that its supply is going away
    fn turn_off(&mut self) -> Result<(), DeviceError>;
}

/// Trait for the display panel
pub trait DisplayPanel: PowerManagedDevice {
    /// Hide (`true`) or show (`false`) the framebuffer without
    /// deinitializing the controller chip
    fn set_blanking(&mut self, blank: bool) -> Result<(), DeviceError>;
}
