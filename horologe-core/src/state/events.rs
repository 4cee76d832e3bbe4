//! Requests that trigger display state transitions

/// Requests accepted by the display state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayRequest {
    /// Leave sleep: resume panel and touch, backlight on, start rendering
    Wake,
    /// Enter sleep: blank, suspend, backlight off, stop rendering
    Sleep,
    /// Switch the display power rail on (ends in sleeping)
    PowerOn,
    /// Switch the display power rail off (only from sleeping)
    PowerOff,
}

impl DisplayRequest {
    /// Request for a `sleep_ctrl(on)` style call
    pub fn sleep_ctrl(on: bool) -> Self {
        if on {
            DisplayRequest::Wake
        } else {
            DisplayRequest::Sleep
        }
    }

    /// Request for a `pwr_ctrl(on)` style call
    pub fn pwr_ctrl(on: bool) -> Self {
        if on {
            DisplayRequest::PowerOn
        } else {
            DisplayRequest::PowerOff
        }
    }
}
