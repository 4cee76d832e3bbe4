//! Hardware adapter implementations
//!
//! This crate provides concrete implementations of the display traits
//! defined in horologe-core on top of embedded-hal:
//!
//! - Backlight (PWM duty cycle)
//! - Display power rail (GPIO enable pin)
//! - Stand-in for peripherals a board does not have

#![no_std]
#![deny(unsafe_code)]

pub mod absent;
pub mod backlight;
pub mod rail;

pub use absent::Absent;
pub use backlight::PwmBacklight;
pub use rail::GpioPowerRail;
