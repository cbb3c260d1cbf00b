pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::{ClassifierConfig, Preset, SaberConfig, MAX_VARIANTS};
pub use api::controller::{SaberController, Toggle};
pub use api::host::SaberHost;
pub use api::types::{BladeSignal, EffectClass, EffectRequest, SoundEvent};
pub use assets::manifest::SoundManifest;
pub use components::theme::{ColorTheme, SaberColor};
pub use crate::core::cooldown::Cooldown;
pub use crate::core::permission::{PermissionGate, PermissionOutcome, PermissionState, PermissionTicket};
pub use crate::core::power::{PowerState, PowerSwitch};
pub use crate::core::rng::Rng;
pub use input::motion::MotionSample;
pub use systems::classifier::{Gesture, MotionClassifier};
pub use systems::diagnostics::Diagnostics;
