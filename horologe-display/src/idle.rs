//! Inactivity timeout service
//!
//! Wraps [`IdleManager`] for shared async use and runs the loop that puts
//! the display to sleep when the watch goes idle and wakes it on activity.

use core::future::Future;

use embassy_futures::select::select;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Instant, Timer};

use horologe_core::config::IdleConfig;
use horologe_core::power::{ActivityState, IdleManager};
use horologe_core::traits::{
    Backlight, ChargerStatus, DisplayPanel, PowerManagedDevice, PowerRail, RenderScheduler,
    Renderer,
};
use horologe_core::DisplayError;

use crate::controller::DisplayController;

/// Display sleep/wake as seen by the idle loop
pub trait DisplayPower {
    /// Wake (`true`) or sleep (`false`) the display
    fn set_awake(&self, awake: bool) -> impl Future<Output = Result<(), DisplayError>>;
}

impl<M, B, P, D, T, R, S> DisplayPower for DisplayController<M, B, P, D, T, R, S>
where
    M: RawMutex,
    B: Backlight,
    P: PowerRail,
    D: DisplayPanel,
    T: PowerManagedDevice,
    R: Renderer,
    S: RenderScheduler,
{
    fn set_awake(&self, awake: bool) -> impl Future<Output = Result<(), DisplayError>> {
        self.sleep_ctrl(awake)
    }
}

fn now_ms() -> u32 {
    // Wrapping is fine, the idle math is wrap-aware
    Instant::now().as_millis() as u32
}

/// Shared idle state plus the loop driving the display from it
pub struct IdleService<M: RawMutex> {
    manager: Mutex<M, IdleManager>,
    /// Raised when activity state changed outside the loop
    changed: Signal<M, ()>,
}

impl<M: RawMutex> IdleService<M> {
    pub const fn new(manager: IdleManager) -> Self {
        Self {
            manager: Mutex::new(manager),
            changed: Signal::new(),
        }
    }

    /// Restart the inactivity timeout
    ///
    /// Returns `true` if this woke the watch, so input handlers can swallow
    /// the event that turned the screen on.
    pub async fn reset_idle_timeout(&self) -> bool {
        let woke = self.manager.lock().await.reset_idle_timeout(now_ms());
        if woke {
            self.changed.signal(());
        }

        woke
    }

    /// Milliseconds until the watch goes inactive
    pub async fn ms_to_inactive(&self) -> u32 {
        self.manager.lock().await.ms_to_inactive(now_ms())
    }

    /// Current activity state
    pub async fn state(&self) -> ActivityState {
        self.manager.lock().await.state()
    }

    /// Report whether the watch is off the wrist and stationary
    pub async fn set_not_worn(&self, not_worn: bool) {
        if self.manager.lock().await.set_not_worn(not_worn).is_some() {
            self.changed.signal(());
        }
    }

    /// Idle loop task body
    ///
    /// Polls the timeout every `poll_interval_ms`, or sooner when activity
    /// is reported, and follows the activity state with the display.
    /// Never returns.
    pub async fn run<P: DisplayPower, C: ChargerStatus>(&self, display: &P, charger: C) {
        let mut applied: Option<bool> = None;

        loop {
            let (display_on, poll_ms) = {
                let mut manager = self.manager.lock().await;
                let config: IdleConfig = *manager.config();
                let keep_awake = config.stay_awake_while_charging && charger.is_charging();

                if let Some(_transition) = manager.poll(now_ms(), keep_awake) {
                    #[cfg(feature = "defmt")]
                    defmt::info!("Activity {} -> {}", _transition.from, _transition.to);
                }

                (manager.state().display_on(), config.poll_interval_ms)
            };

            if applied != Some(display_on) {
                match display.set_awake(display_on).await {
                    Ok(()) | Err(DisplayError::AlreadyInState) => {}
                    Err(_e) => {
                        // Powered off: not retried, the next activity change tries again
                        #[cfg(feature = "defmt")]
                        defmt::warn!("Idle display update failed: {}", _e);
                    }
                }
                applied = Some(display_on);
            }

            select(Timer::after_millis(u64::from(poll_ms)), self.changed.wait()).await;
        }
    }
}
