//! Configuration types
//!
//! Board profile and timing parameters for the display and idle handling.

pub mod display;
pub mod idle;

pub use display::*;
pub use idle::*;
