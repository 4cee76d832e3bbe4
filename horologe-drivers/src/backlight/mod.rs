//! Backlight output implementations

pub mod pwm;

pub use pwm::PwmBacklight;
