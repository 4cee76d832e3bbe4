//! State machine definition
//!
//! Sleep/wake and power on/off requests are a function of the current
//! state. Anything not listed in the transition tables is rejected and
//! leaves the state untouched.

use super::events::DisplayRequest;
use crate::error::DisplayError;

/// Display power states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Panel resumed, backlight on, render tick running
    Awake,
    /// Panel and touch suspended, backlight off, power rail still on
    Sleeping,
    /// Power rail off; must power on before waking
    PoweredOff,
}

impl DisplayState {
    /// State after init, before the first wake
    pub const INITIAL: Self = DisplayState::Sleeping;

    /// Check if rendering is allowed in this state
    pub fn render_allowed(&self) -> bool {
        matches!(self, DisplayState::Awake)
    }

    /// Check if the display power rail is on
    pub fn is_powered(&self) -> bool {
        !matches!(self, DisplayState::PoweredOff)
    }

    /// Next state for a sleep (`wake == false`) or wake (`wake == true`) request
    pub fn on_sleep_request(self, wake: bool) -> Result<Self, DisplayError> {
        use DisplayState::*;

        match (self, wake) {
            (Sleeping, true) => Ok(Awake),
            (Awake, false) => Ok(Sleeping),
            (Awake, true) | (Sleeping, false) => Err(DisplayError::AlreadyInState),
            // Power on before waking; already effectively off for sleep
            (PoweredOff, _) => Err(DisplayError::DeviceOff),
        }
    }

    /// Next state for a power on (`on == true`) or power off request
    pub fn on_power_request(self, on: bool) -> Result<Self, DisplayError> {
        use DisplayState::*;

        match (self, on) {
            (Sleeping, false) => Ok(PoweredOff),
            (PoweredOff, true) => Ok(Sleeping),
            // Awake + off is rejected too: sleep before power off
            _ => Err(DisplayError::AlreadyInState),
        }
    }

    /// Process a request and return the next state
    pub fn transition(self, request: DisplayRequest) -> Result<Self, DisplayError> {
        match request {
            DisplayRequest::Wake => self.on_sleep_request(true),
            DisplayRequest::Sleep => self.on_sleep_request(false),
            DisplayRequest::PowerOn => self.on_power_request(true),
            DisplayRequest::PowerOff => self.on_power_request(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wake_from_sleeping() {
        assert_eq!(
            DisplayState::Sleeping.on_sleep_request(true),
            Ok(DisplayState::Awake)
        );
    }

    #[test]
    fn test_sleep_from_awake() {
        assert_eq!(
            DisplayState::Awake.on_sleep_request(false),
            Ok(DisplayState::Sleeping)
        );
    }

    #[test]
    fn test_repeated_sleep_requests_are_noops() {
        assert_eq!(
            DisplayState::Awake.on_sleep_request(true),
            Err(DisplayError::AlreadyInState)
        );
        assert_eq!(
            DisplayState::Sleeping.on_sleep_request(false),
            Err(DisplayError::AlreadyInState)
        );
    }

    #[test]
    fn test_powered_off_rejects_sleep_and_wake() {
        for wake in [true, false] {
            assert_eq!(
                DisplayState::PoweredOff.on_sleep_request(wake),
                Err(DisplayError::DeviceOff)
            );
        }
    }

    #[test]
    fn test_power_cycle() {
        let off = DisplayState::Sleeping.on_power_request(false);
        assert_eq!(off, Ok(DisplayState::PoweredOff));

        let on = DisplayState::PoweredOff.on_power_request(true);
        assert_eq!(on, Ok(DisplayState::Sleeping));
    }

    #[test]
    fn test_power_off_while_awake_rejected() {
        assert_eq!(
            DisplayState::Awake.on_power_request(false),
            Err(DisplayError::AlreadyInState)
        );
    }

    #[test]
    fn test_redundant_power_requests() {
        assert_eq!(
            DisplayState::Awake.on_power_request(true),
            Err(DisplayError::AlreadyInState)
        );
        assert_eq!(
            DisplayState::Sleeping.on_power_request(true),
            Err(DisplayError::AlreadyInState)
        );
        assert_eq!(
            DisplayState::PoweredOff.on_power_request(false),
            Err(DisplayError::AlreadyInState)
        );
    }

    #[test]
    fn test_state_queries() {
        assert!(DisplayState::Awake.render_allowed());
        assert!(!DisplayState::Sleeping.render_allowed());
        assert!(!DisplayState::PoweredOff.render_allowed());

        assert!(DisplayState::Awake.is_powered());
        assert!(DisplayState::Sleeping.is_powered());
        assert!(!DisplayState::PoweredOff.is_powered());
    }

    fn any_request() -> impl Strategy<Value = DisplayRequest> {
        prop_oneof![
            Just(DisplayRequest::Wake),
            Just(DisplayRequest::Sleep),
            Just(DisplayRequest::PowerOn),
            Just(DisplayRequest::PowerOff),
        ]
    }

    proptest! {
        #[test]
        fn rejected_requests_keep_state(requests in proptest::collection::vec(any_request(), 0..64)) {
            let mut state = DisplayState::INITIAL;
            for request in requests {
                if let Ok(next) = state.transition(request) {
                    prop_assert_ne!(next, state);
                    state = next;
                }
            }
        }

        #[test]
        fn awake_only_reachable_through_sleeping(requests in proptest::collection::vec(any_request(), 0..64)) {
            let mut state = DisplayState::INITIAL;
            for request in requests {
                if let Ok(next) = state.transition(request) {
                    if next == DisplayState::Awake {
                        prop_assert_eq!(state, DisplayState::Sleeping);
                        prop_assert_eq!(request, DisplayRequest::Wake);
                    }
                    if next == DisplayState::PoweredOff {
                        prop_assert_eq!(state, DisplayState::Sleeping);
                    }
                    state = next;
                }
            }
        }

        #[test]
        fn repeating_a_request_is_rejected(request in any_request(), prefix in proptest::collection::vec(any_request(), 0..16)) {
            let mut state = DisplayState::INITIAL;
            for r in prefix {
                state = state.transition(r).unwrap_or(state);
            }
            if let Ok(next) = state.transition(request) {
                prop_assert!(next.transition(request).is_err());
            }
        }
    }
}
