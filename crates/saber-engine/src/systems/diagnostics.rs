//! Debug overlay data: a serializable snapshot of controller state.

use serde::Serialize;

use crate::components::theme::SaberColor;
use crate::core::permission::PermissionState;
use crate::core::power::PowerState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub permission: PermissionState,
    pub power: PowerState,
    /// Magnitude of the last processed sample, rounded to 2 decimals.
    pub acceleration: f32,
    pub last_swing_ms: Option<f64>,
    pub last_hit_ms: Option<f64>,
    pub swings: u32,
    pub hits: u32,
    pub color: SaberColor,
    pub subscribed: bool,
}

impl Diagnostics {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Round to two decimal places for display.
pub fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}
