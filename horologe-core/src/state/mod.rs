//! Display power state machine
//!
//! Defines which display states exist and which requests move between
//! them. The machine is explicit, finite, and deterministic; side effects
//! on hardware are the display controller's job.

pub mod events;
pub mod machine;

pub use events::DisplayRequest;
pub use machine::DisplayState;
