//! Hardware abstraction traits
//!
//! These traits define the interface between the display controller
//! and the board-specific peripherals, renderer, and scheduler.

pub mod backlight;
pub mod charger;
pub mod power;
pub mod render;

pub use backlight::Backlight;
pub use charger::ChargerStatus;
pub use power::{DeviceAction, DisplayPanel, PowerManagedDevice, PowerRail};
pub use render::{RenderScheduler, Renderer};
