//! Rendering and render scheduling traits

/// Trait for the UI rendering subsystem
pub trait Renderer {
    /// Run one render pass
    ///
    /// Returns the delay in milliseconds until the next pass is needed.
    fn tick(&mut self) -> u32;

    /// Mark the whole screen dirty so the next pass redraws everything
    fn invalidate_all(&mut self);
}

/// Trait for the re-schedulable render tick
///
/// The display controller owns the only handle, so every call happens
/// with the controller lock held.
pub trait RenderScheduler {
    /// Run the next tick after `delay_ms`, replacing any pending schedule
    fn schedule(&mut self, delay_ms: u32);

    /// Cancel the pending tick
    ///
    /// When this returns, no tick from an earlier schedule may run. Ticks
    /// carry the generation they were scheduled with; cancelling moves to
    /// a new generation so a tick already on its way is dropped.
    fn cancel_and_wait(&mut self);

    /// Check if a tick is scheduled
    fn is_pending(&self) -> bool;

    /// Current schedule generation
    fn generation(&self) -> u32;
}
