//! Mock peripherals for testing

use std::vec::Vec;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use horologe_core::config::DisplayConfig;
use horologe_core::devices::DisplayDevices;
use horologe_core::traits::{
    Backlight, DeviceAction, DisplayPanel, PowerManagedDevice, PowerRail, RenderScheduler,
    Renderer,
};
use horologe_core::{Brightness, DeviceError};

use crate::controller::DisplayController;

/// Backlight recording every level written
pub struct MockBacklight {
    pub ready: bool,
    pub levels: Vec<Brightness>,
}

impl MockBacklight {
    pub fn new() -> Self {
        Self {
            ready: true,
            levels: Vec::new(),
        }
    }

    pub fn level(&self) -> Option<Brightness> {
        self.levels.last().copied()
    }
}

impl Backlight for MockBacklight {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn apply(&mut self, level: Brightness) -> Result<(), DeviceError> {
        if !self.ready {
            return Err(DeviceError::NotReady);
        }
        self.levels.push(level);
        Ok(())
    }
}

/// Power rail tracking its switch state
pub struct MockRail {
    pub ready: bool,
    pub enabled: bool,
    pub switches: u32,
}

impl MockRail {
    pub fn new() -> Self {
        Self {
            ready: true,
            enabled: true,
            switches: 0,
        }
    }
}

impl PowerRail for MockRail {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn enable(&mut self) -> Result<(), DeviceError> {
        self.enabled = true;
        self.switches += 1;
        Ok(())
    }

    fn disable(&mut self) -> Result<(), DeviceError> {
        self.enabled = false;
        self.switches += 1;
        Ok(())
    }
}

/// Panel or touch controller recording power actions
pub struct MockDevice {
    pub ready: bool,
    pub suspended: bool,
    pub powered: bool,
    pub blanked: bool,
    pub actions: Vec<DeviceAction>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            ready: true,
            suspended: true,
            powered: true,
            blanked: true,
            actions: Vec::new(),
        }
    }

    fn record(&mut self, action: DeviceAction) -> Result<(), DeviceError> {
        if !self.ready {
            return Err(DeviceError::NotReady);
        }
        self.actions.push(action);
        Ok(())
    }
}

impl PowerManagedDevice for MockDevice {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn suspend(&mut self) -> Result<(), DeviceError> {
        self.record(DeviceAction::Suspend)?;
        self.suspended = true;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), DeviceError> {
        self.record(DeviceAction::Resume)?;
        self.suspended = false;
        Ok(())
    }

    fn turn_on(&mut self) -> Result<(), DeviceError> {
        self.record(DeviceAction::TurnOn)?;
        self.powered = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), DeviceError> {
        self.record(DeviceAction::TurnOff)?;
        self.powered = false;
        Ok(())
    }
}

impl DisplayPanel for MockDevice {
    fn set_blanking(&mut self, blank: bool) -> Result<(), DeviceError> {
        self.record(DeviceAction::Blanking)?;
        self.blanked = blank;
        Ok(())
    }
}

/// Renderer counting passes
pub struct MockRenderer {
    pub ticks: u32,
    pub invalidations: u32,
    pub next_ms: u32,
}

impl MockRenderer {
    pub fn new(next_ms: u32) -> Self {
        Self {
            ticks: 0,
            invalidations: 0,
            next_ms,
        }
    }
}

impl Renderer for MockRenderer {
    fn tick(&mut self) -> u32 {
        self.ticks += 1;
        self.next_ms
    }

    fn invalidate_all(&mut self) {
        self.invalidations += 1;
    }
}

/// Scheduler that only records requests
pub struct MockScheduler {
    pub pending: Option<u32>,
    pub generation: u32,
    pub cancels: u32,
}

impl MockScheduler {
    pub fn new() -> Self {
        Self {
            pending: None,
            generation: 0,
            cancels: 0,
        }
    }
}

impl RenderScheduler for MockScheduler {
    fn schedule(&mut self, delay_ms: u32) {
        self.pending = Some(delay_ms);
    }

    fn cancel_and_wait(&mut self) {
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
        self.cancels += 1;
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn generation(&self) -> u32 {
        self.generation
    }
}

pub type MockController<S = MockScheduler> = DisplayController<
    NoopRawMutex,
    MockBacklight,
    MockRail,
    MockDevice,
    MockDevice,
    MockRenderer,
    S,
>;

pub fn mock_devices() -> DisplayDevices<MockBacklight, MockRail, MockDevice, MockDevice> {
    DisplayDevices::new(
        MockBacklight::new(),
        MockRail::new(),
        MockDevice::new(),
        MockDevice::new(),
    )
}

/// Controller on mock peripherals, renderer asking for a tick every 16ms
pub fn mock_controller(config: DisplayConfig) -> MockController {
    DisplayController::new(
        mock_devices(),
        MockRenderer::new(16),
        MockScheduler::new(),
        config,
    )
}
