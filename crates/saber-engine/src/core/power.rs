use serde::Serialize;

use crate::api::types::EffectRequest;

/// Whether the blade is ignited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    #[default]
    Off,
    On,
}

impl PowerState {
    pub fn is_on(self) -> bool {
        self == PowerState::On
    }

    pub fn flipped(self) -> Self {
        match self {
            PowerState::Off => PowerState::On,
            PowerState::On => PowerState::Off,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PowerState::Off => "off",
            PowerState::On => "on",
        }
    }
}

/// Two-state switch flipped only by explicit user action.
#[derive(Debug, Clone, Default)]
pub struct PowerSwitch {
    state: PowerState,
}

impl PowerSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Flip the switch. Returns the new state and the one effect it produces.
    pub fn toggle(&mut self) -> (PowerState, EffectRequest) {
        self.state = self.state.flipped();
        let effect = match self.state {
            PowerState::On => EffectRequest::activate(),
            PowerState::Off => EffectRequest::deactivate(),
        };
        (self.state, effect)
    }
}
