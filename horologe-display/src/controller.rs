//! Display power/state controller
//!
//! Owns the display state machine and every piece of mutable display
//! state: current [`DisplayState`], the brightness to restore on wake, the
//! "first render since power on" flag, and the render scheduler handle.
//! All of it sits behind one async mutex, so transitions from input
//! handling, the idle loop, application code, and the render loop never
//! interleave.
//!
//! # Transitions
//!
//! | Current    | wake                  | sleep          | power on        | power off      |
//! |------------|-----------------------|----------------|-----------------|----------------|
//! | Awake      | already               | → Sleeping     | already         | rejected       |
//! | Sleeping   | → Awake               | already        | already         | → PoweredOff   |
//! | PoweredOff | `DeviceOff`           | `DeviceOff`    | → Sleeping      | already        |
//!
//! After power on the backlight stays dark until the first frame has been
//! rendered, so the user never sees the panel's power-up garbage.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use horologe_core::brightness::MAX_PERCENT;
use horologe_core::config::DisplayConfig;
use horologe_core::devices::{DeviceKind, DisplayDevices, ProbeReport};
use horologe_core::traits::{
    Backlight, DeviceAction, DisplayPanel, PowerManagedDevice, PowerRail, RenderScheduler,
    Renderer,
};
use horologe_core::{Brightness, DeviceError, DisplayError, DisplayRequest, DisplayState};

/// Display power/state controller
///
/// Generic over the mutex flavour `M` (pick `CriticalSectionRawMutex` when
/// callers live in different executors), the four display peripherals, the
/// renderer, and the render scheduler.
pub struct DisplayController<M: RawMutex, B, P, D, T, R, S> {
    pub(crate) inner: Mutex<M, Inner<B, P, D, T, R, S>>,
}

/// State guarded by the controller lock
pub(crate) struct Inner<B, P, D, T, R, S> {
    pub(crate) devices: DisplayDevices<B, P, D, T>,
    pub(crate) renderer: R,
    pub(crate) scheduler: S,
    config: DisplayConfig,
    pub(crate) state: DisplayState,
    /// Backlight stays off until the first frame after power on
    pub(crate) first_render_since_poweron: bool,
    /// Last non-zero brightness, restored on wake
    last_brightness: Brightness,
}

impl<M, B, P, D, T, R, S> DisplayController<M, B, P, D, T, R, S>
where
    M: RawMutex,
    B: Backlight,
    P: PowerRail,
    D: DisplayPanel,
    T: PowerManagedDevice,
    R: Renderer,
    S: RenderScheduler,
{
    /// Create a controller
    ///
    /// Does not touch hardware; call [`init`](Self::init) or
    /// [`start`](Self::start) once the peripherals are up.
    pub const fn new(
        devices: DisplayDevices<B, P, D, T>,
        renderer: R,
        scheduler: S,
        config: DisplayConfig,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                devices,
                renderer,
                scheduler,
                config,
                state: DisplayState::INITIAL,
                first_render_since_poweron: false,
                last_brightness: config.default_brightness,
            }),
        }
    }

    /// Probe the peripherals and reset to `Sleeping`
    ///
    /// Missing peripherals are logged and reported, never fatal. Calling it
    /// again later runs the sleep or power on sequence needed to get there.
    pub async fn init(&self) -> ProbeReport {
        let mut inner = self.inner.lock().await;

        let report = inner.devices.probe();
        if inner.state.render_allowed() {
            inner.enter_sleep();
        } else if !inner.state.is_powered() {
            inner.power_on();
        }
        inner.state = DisplayState::INITIAL;

        report
    }

    /// Init, then wake the display
    pub async fn start(&self) -> ProbeReport {
        let report = self.init().await;

        if let Err(_e) = self.sleep_ctrl(true).await {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display wake at startup failed: {}", _e);
        }

        report
    }

    /// Wake (`on == true`) or put to sleep (`on == false`)
    pub async fn sleep_ctrl(&self, on: bool) -> Result<(), DisplayError> {
        let mut inner = self.inner.lock().await;

        let current = inner.state;
        let request = DisplayRequest::sleep_ctrl(on);
        let next = current
            .on_sleep_request(on)
            .map_err(|e| rejected(current, request, e))?;

        inner.state = next;
        if on {
            inner.wake();
        } else {
            inner.enter_sleep();
        }

        Ok(())
    }

    /// Power the display on (`on == true`) or off (`on == false`)
    ///
    /// Power off is only accepted while sleeping.
    pub async fn pwr_ctrl(&self, on: bool) -> Result<(), DisplayError> {
        let mut inner = self.inner.lock().await;

        let current = inner.state;
        let request = DisplayRequest::pwr_ctrl(on);
        let next = current
            .on_power_request(on)
            .map_err(|e| rejected(current, request, e))?;

        inner.state = next;
        if on {
            inner.power_on();
        } else {
            inner.power_off();
        }

        Ok(())
    }

    /// Brightness restored on wake, in percent
    pub async fn brightness(&self) -> u8 {
        self.inner.lock().await.last_brightness.percent()
    }

    /// Set the backlight brightness in percent
    ///
    /// Applied right away whatever the state. Non-zero values also become
    /// the brightness restored on wake.
    ///
    /// # Panics
    ///
    /// In debug builds, if `percent` is above 100. Release builds clamp.
    pub async fn set_brightness(&self, percent: u8) {
        debug_assert!(
            percent <= MAX_PERCENT,
            "Invalid range for brightness, valid range 0-100, was {}",
            percent
        );

        self.inner
            .lock()
            .await
            .apply_brightness(Brightness::clamped(percent));
    }

    /// Current display state
    pub async fn state(&self) -> DisplayState {
        self.inner.lock().await.state
    }

    /// Check if the backlight is waiting for the first frame after power on
    pub async fn first_render_pending(&self) -> bool {
        self.inner.lock().await.first_render_since_poweron
    }

    /// Check if a render tick is scheduled
    pub async fn render_pending(&self) -> bool {
        self.inner.lock().await.scheduler.is_pending()
    }

    /// Run one render tick scheduled under `generation`
    ///
    /// Called by the render loop when its timer fires. Returns `false`
    /// without rendering if the display is not awake or the tick was
    /// cancelled since it was scheduled.
    pub async fn render_tick(&self, generation: u32) -> bool {
        let mut inner = self.inner.lock().await;

        if !inner.state.render_allowed() || inner.scheduler.generation() != generation {
            return false;
        }

        let next_ms = inner.renderer.tick();

        if inner.first_render_since_poweron {
            let level = inner.last_brightness;
            inner.apply_brightness(level);
            inner.first_render_since_poweron = false;
        }

        inner.scheduler.schedule(next_ms);
        true
    }
}

impl<B, P, D, T, R, S> Inner<B, P, D, T, R, S>
where
    B: Backlight,
    P: PowerRail,
    D: DisplayPanel,
    T: PowerManagedDevice,
    R: Renderer,
    S: RenderScheduler,
{
    fn enter_sleep(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Put display to sleep");

        check(self.devices.display.set_blanking(true), DeviceKind::Display, DeviceAction::Blanking);
        check(self.devices.display.suspend(), DeviceKind::Display, DeviceAction::Suspend);
        if self.devices.touch.is_ready() {
            check(self.devices.touch.suspend(), DeviceKind::Touch, DeviceAction::Suspend);
        }

        // The PWM peripheral draws ~200uA even with the panel suspended
        self.apply_brightness(Brightness::OFF);

        // Panel loses its contents; the next frame must be a full redraw
        self.scheduler.cancel_and_wait();
        self.renderer.invalidate_all();
    }

    fn wake(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Wake up display");

        check(self.devices.display.resume(), DeviceKind::Display, DeviceAction::Resume);
        if self.devices.touch.is_ready() {
            check(self.devices.touch.resume(), DeviceKind::Touch, DeviceAction::Resume);
        }

        // Right after power on the panel holds random pixels until the
        // first frame lands; the render tick turns the backlight on then
        if !self.first_render_since_poweron {
            self.apply_brightness(self.last_brightness);
        }

        check(
            self.devices.display.set_blanking(false),
            DeviceKind::Display,
            DeviceAction::Blanking,
        );
        self.scheduler.schedule(self.config.wake_render_delay_ms);
    }

    fn power_off(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Display sleeping, power off");

        if self.config.rail_switching {
            check(self.devices.rail.disable(), DeviceKind::PowerRail, DeviceAction::Rail);
        }
        check(self.devices.display.turn_off(), DeviceKind::Display, DeviceAction::TurnOff);
    }

    fn power_on(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Display off, power on");

        if self.config.rail_switching {
            check(self.devices.rail.enable(), DeviceKind::PowerRail, DeviceAction::Rail);
        }
        check(self.devices.display.turn_on(), DeviceKind::Display, DeviceAction::TurnOn);
        self.first_render_since_poweron = true;
    }

    fn apply_brightness(&mut self, level: Brightness) {
        if self.state != DisplayState::Awake && !level.is_off() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Setting brightness to {} while display is {}, active/inactive state may be off",
                level,
                self.state
            );
        }

        if !level.is_off() {
            self.last_brightness = level;
        }

        check(self.devices.backlight.apply(level), DeviceKind::Backlight, DeviceAction::Backlight);
    }
}

fn rejected(
    _state: DisplayState,
    _request: DisplayRequest,
    error: DisplayError,
) -> DisplayError {
    #[cfg(feature = "defmt")]
    defmt::debug!("{} ignored, display {}: {}", _request, _state, error);

    error
}

fn check(result: Result<(), DeviceError>, _device: DeviceKind, _action: DeviceAction) {
    if let Err(_e) = result {
        #[cfg(feature = "defmt")]
        defmt::warn!("{} {} skipped: {}", _device, _action, _e);
    }
}
