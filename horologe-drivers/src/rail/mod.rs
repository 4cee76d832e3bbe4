//! Power rail implementations

pub mod gpio;

pub use gpio::GpioPowerRail;
