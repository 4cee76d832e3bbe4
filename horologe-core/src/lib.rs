//! Board-agnostic core logic for the watch display power subsystem
//!
//! This crate contains everything about display power that does not depend
//! on a specific executor or chip:
//!
//! - Display state machine (awake / sleeping / powered off)
//! - Error taxonomy for transitions and device adapters
//! - Brightness type and pulse-width math
//! - Hardware abstraction traits (backlight, power rail, panel, touch)
//! - Renderer and render scheduler traits
//! - Inactivity model driving sleep/wake requests
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod brightness;
pub mod config;
pub mod devices;
pub mod error;
pub mod power;
pub mod state;
pub mod traits;

pub use brightness::Brightness;
pub use error::{DeviceError, DisplayError};
pub use state::{DisplayRequest, DisplayState};
