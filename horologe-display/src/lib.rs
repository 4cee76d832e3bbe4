//! Display power/state controller
//!
//! Async half of the display subsystem, built on embassy:
//!
//! - [`DisplayController`] - awake / sleeping / powered-off state machine
//!   with one lock serializing every transition
//! - [`RenderWork`] and [`run_render_loop`] - the self-rescheduling render
//!   tick, cancellable from the sleep transition
//! - [`IdleService`] - inactivity timeout driving sleep/wake
//!
//! ```text
//!  input / app / idle ──► DisplayController ──► backlight, rail, panel, touch
//!                              │    ▲
//!                   schedule/  │    │ tick(generation)
//!                   cancel     ▼    │
//!                          RenderWork ◄── run_render_loop (timer)
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod controller;
pub mod idle;
pub mod render;

#[cfg(test)]
mod mock;

pub use controller::DisplayController;
pub use idle::{DisplayPower, IdleService};
pub use render::{run_render_loop, RenderCommand, RenderHandle, RenderTarget, RenderWork};
