//! Render tick scheduling
//!
//! The render tick is a self-rescheduling delayed job. The controller
//! schedules and cancels it through a [`RenderHandle`] while holding its
//! own lock; [`run_render_loop`] owns the timer and calls back into the
//! controller when it fires.
//!
//! Cancellation bumps a generation counter. A tick carries the generation
//! it was scheduled under and the controller drops it if the counter has
//! moved on, so once `cancel_and_wait` returns no cancelled tick can render,
//! even one whose timer already fired and is waiting for the lock.

use core::future::Future;

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;

use horologe_core::traits::{
    Backlight, DisplayPanel, PowerManagedDevice, PowerRail, RenderScheduler, Renderer,
};

use crate::controller::DisplayController;

/// Request from the controller to the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderCommand {
    /// Run a tick after `delay_ms`, replacing any pending one
    Schedule { delay_ms: u32, generation: u32 },
    /// Drop the pending tick
    Cancel,
}

/// Channel between the controller and the render loop
///
/// Only the latest command matters, so a [`Signal`] is enough.
pub struct RenderWork<M: RawMutex> {
    command: Signal<M, RenderCommand>,
}

impl<M: RawMutex> RenderWork<M> {
    pub const fn new() -> Self {
        Self {
            command: Signal::new(),
        }
    }
}

impl<M: RawMutex> Default for RenderWork<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller-side scheduler writing into a [`RenderWork`]
pub struct RenderHandle<'a, M: RawMutex> {
    work: &'a RenderWork<M>,
    pending: bool,
    generation: u32,
}

impl<'a, M: RawMutex> RenderHandle<'a, M> {
    pub const fn new(work: &'a RenderWork<M>) -> Self {
        Self {
            work,
            pending: false,
            generation: 0,
        }
    }
}

impl<M: RawMutex> RenderScheduler for RenderHandle<'_, M> {
    fn schedule(&mut self, delay_ms: u32) {
        self.pending = true;
        self.work.command.signal(RenderCommand::Schedule {
            delay_ms,
            generation: self.generation,
        });
    }

    fn cancel_and_wait(&mut self) {
        // Ticks already past their timer are dropped on the generation check
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
        self.work.command.signal(RenderCommand::Cancel);
    }

    fn is_pending(&self) -> bool {
        self.pending
    }

    fn generation(&self) -> u32 {
        self.generation
    }
}

/// Something the render loop ticks
pub trait RenderTarget {
    /// Render one pass for a tick scheduled under `generation`
    ///
    /// Returns `false` if the tick was dropped.
    fn tick(&self, generation: u32) -> impl Future<Output = bool>;
}

impl<M, B, P, D, T, R, S> RenderTarget for DisplayController<M, B, P, D, T, R, S>
where
    M: RawMutex,
    B: Backlight,
    P: PowerRail,
    D: DisplayPanel,
    T: PowerManagedDevice,
    R: Renderer,
    S: RenderScheduler,
{
    fn tick(&self, generation: u32) -> impl Future<Output = bool> {
        self.render_tick(generation)
    }
}

/// Render loop task body
///
/// Waits for scheduled ticks and runs them on `target`. Never returns;
/// spawn it next to the code driving the controller.
pub async fn run_render_loop<M: RawMutex, T: RenderTarget>(target: &T, work: &RenderWork<M>) {
    let mut pending: Option<(u32, u32)> = None;

    loop {
        let command = match pending {
            Some((delay_ms, generation)) => {
                match select(Timer::after_millis(u64::from(delay_ms)), work.command.wait()).await {
                    Either::First(()) => {
                        pending = None;
                        if !target.tick(generation).await {
                            #[cfg(feature = "defmt")]
                            defmt::trace!("Render tick {} dropped", generation);
                        }
                        continue;
                    }
                    Either::Second(command) => command,
                }
            }
            None => work.command.wait().await,
        };

        pending = match command {
            RenderCommand::Schedule {
                delay_ms,
                generation,
            } => Some((delay_ms, generation)),
            RenderCommand::Cancel => None,
        };
    }
}
