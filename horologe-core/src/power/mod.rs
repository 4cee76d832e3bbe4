//! User activity tracking
//!
//! Decides when the watch should go inactive (display asleep) and when
//! activity should wake it again.

pub mod idle;

pub use idle::{ActivityState, ActivityTransition, IdleManager};
