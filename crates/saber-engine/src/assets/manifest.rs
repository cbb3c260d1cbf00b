use serde::{Deserialize, Serialize};

use crate::api::types::{EffectClass, EffectRequest};

/// Sound files for every cue the controller can request.
/// Swing/hit lists are indexed by variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundManifest {
    pub activate: String,
    pub deactivate: String,
    pub swing: Vec<String>,
    pub hit: Vec<String>,
}

impl Default for SoundManifest {
    fn default() -> Self {
        Self {
            activate: "/sounds/switch/activate.wav".into(),
            deactivate: "/sounds/switch/deactivate.wav".into(),
            swing: (1..=5).map(|i| format!("/sounds/swing/swing_{i}.wav")).collect(),
            hit: (1..=5).map(|i| format!("/sounds/hit/hit_{i}.wav")).collect(),
        }
    }
}

impl SoundManifest {
    /// The single-file sound set of the classic saber.
    pub fn classic() -> Self {
        Self {
            activate: "/sounds/lightsaber-on.mp3".into(),
            deactivate: "/sounds/lightsaber-off.mp3".into(),
            swing: vec!["/sounds/lightsaber-swing.mp3".into()],
            hit: Vec::new(),
        }
    }

    /// Parse a manifest from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Path of the file to play for `request`, if the manifest has one.
    pub fn path_for(&self, request: &EffectRequest) -> Option<&str> {
        match request.class {
            EffectClass::Activate => Some(self.activate.as_str()),
            EffectClass::Deactivate => Some(self.deactivate.as_str()),
            EffectClass::Swing => self.swing.get(request.variant as usize).map(String::as_str),
            EffectClass::Hit => self.hit.get(request.variant as usize).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let sounds = SoundManifest::default();
        assert_eq!(
            sounds.path_for(&EffectRequest::activate()),
            Some("/sounds/switch/activate.wav")
        );
        assert_eq!(
            sounds.path_for(&EffectRequest::swing(0)),
            Some("/sounds/swing/swing_1.wav")
        );
        assert_eq!(
            sounds.path_for(&EffectRequest::hit(4)),
            Some("/sounds/hit/hit_5.wav")
        );
    }

    #[test]
    fn out_of_range_variant_has_no_path() {
        let sounds = SoundManifest::classic();
        assert_eq!(
            sounds.path_for(&EffectRequest::swing(0)),
            Some("/sounds/lightsaber-swing.mp3")
        );
        assert_eq!(sounds.path_for(&EffectRequest::swing(1)), None);
        assert_eq!(sounds.path_for(&EffectRequest::hit(0)), None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "swing": ["a.wav", "b.wav"] }"#;
        let sounds = SoundManifest::from_json(json).unwrap();
        assert_eq!(sounds.swing, vec!["a.wav".to_string(), "b.wav".to_string()]);
        assert_eq!(sounds.activate, "/sounds/switch/activate.wav");
        assert_eq!(sounds.hit.len(), 5);
    }
}
