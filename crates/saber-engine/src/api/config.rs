use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assets::manifest::SoundManifest;
use crate::components::theme::SaberColor;

/// Largest number of sound variants per class.
pub const MAX_VARIANTS: u32 = 0x100;

pub const DEFAULT_SWING_THRESHOLD: f32 = 8.0;
pub const DEFAULT_HIT_THRESHOLD: f32 = 12.0;

/// Thresholds, cooldowns and variant counts for the motion classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Magnitude a sample must exceed to count as a swing (default: 8.0).
    pub swing_threshold: f32,
    /// Magnitude a sample must exceed to count as a hit.
    /// `None` disables hit detection entirely (default).
    pub hit_threshold: Option<f32>,
    /// Minimum milliseconds between two swings (default: 250).
    pub swing_cooldown_ms: f64,
    /// Minimum milliseconds between two hits (default: 500).
    pub hit_cooldown_ms: f64,
    /// Number of swing sounds to choose from (default: 5).
    pub swing_variants: u32,
    /// Number of hit sounds to choose from (default: 5).
    pub hit_variants: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            swing_threshold: DEFAULT_SWING_THRESHOLD,
            hit_threshold: None,
            swing_cooldown_ms: 250.0,
            hit_cooldown_ms: 500.0,
            swing_variants: 5,
            hit_variants: 5,
        }
    }
}

impl ClassifierConfig {
    /// Single swing sound, higher threshold, slower cooldown.
    pub fn classic() -> Self {
        Self {
            swing_threshold: 15.0,
            swing_cooldown_ms: 500.0,
            swing_variants: 1,
            ..Self::default()
        }
    }

    /// Default swing tuning plus hit detection.
    pub fn with_hits() -> Self {
        Self {
            hit_threshold: Some(DEFAULT_HIT_THRESHOLD),
            ..Self::default()
        }
    }

    pub fn hits_enabled(&self) -> bool {
        self.hit_threshold.is_some()
    }

    /// Replace out-of-range values with usable ones, logging each fix.
    pub fn sanitized(mut self) -> Self {
        if !valid_threshold(self.swing_threshold) {
            log::warn!(
                "invalid swing_threshold {}; using {}",
                self.swing_threshold, DEFAULT_SWING_THRESHOLD
            );
            self.swing_threshold = DEFAULT_SWING_THRESHOLD;
        }
        if let Some(hit) = self.hit_threshold {
            if !valid_threshold(hit) {
                log::warn!("invalid hit_threshold {}; using {}", hit, DEFAULT_HIT_THRESHOLD);
                self.hit_threshold = Some(DEFAULT_HIT_THRESHOLD);
            }
        }
        self.swing_cooldown_ms = sanitize_cooldown("swing_cooldown_ms", self.swing_cooldown_ms);
        self.hit_cooldown_ms = sanitize_cooldown("hit_cooldown_ms", self.hit_cooldown_ms);
        self.swing_variants = sanitize_variants("swing_variants", self.swing_variants);
        self.hit_variants = sanitize_variants("hit_variants", self.hit_variants);
        self
    }
}

fn valid_threshold(t: f32) -> bool {
    t.is_finite() && t > 0.0
}

fn sanitize_cooldown(name: &str, ms: f64) -> f64 {
    if ms.is_finite() && ms >= 0.0 {
        ms
    } else {
        log::warn!("invalid {} {}; using 0", name, ms);
        0.0
    }
}

fn sanitize_variants(name: &str, count: u32) -> u32 {
    let clamped = count.clamp(1, MAX_VARIANTS);
    if clamped != count {
        log::warn!("{} {} out of range; using {}", name, count, clamped);
    }
    clamped
}

/// Named starting point for a JSON config. Fields present in the JSON
/// override the preset's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Default,
    /// Single swing sound, threshold 15, 500 ms cooldown.
    Classic,
    /// Five swing and five hit variants, hit threshold 12.
    Hits,
}

impl Preset {
    pub fn config(self) -> SaberConfig {
        match self {
            Preset::Default => SaberConfig::default(),
            Preset::Classic => SaberConfig::classic(),
            Preset::Hits => SaberConfig::with_hits(),
        }
    }
}

/// Everything a controller needs, loadable from JSON.
/// Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaberConfig {
    pub classifier: ClassifierConfig,
    pub sounds: SoundManifest,
    /// Initial blade color.
    pub color: SaberColor,
    /// Whether a platform with no motion API at all counts as granted.
    pub implicit_grant: bool,
    /// Fixed RNG seed. `None` lets the host pick one from its random source.
    pub seed: Option<u64>,
}

impl Default for SaberConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            sounds: SoundManifest::default(),
            color: SaberColor::default(),
            implicit_grant: true,
            seed: None,
        }
    }
}

impl SaberConfig {
    pub fn classic() -> Self {
        Self {
            classifier: ClassifierConfig::classic(),
            sounds: SoundManifest::classic(),
            ..Self::default()
        }
    }

    pub fn with_hits() -> Self {
        Self {
            classifier: ClassifierConfig::with_hits(),
            ..Self::default()
        }
    }

    /// Parse and sanitize a config from a JSON string.
    ///
    /// An optional top-level `"preset"` ("default", "classic", "hits") picks
    /// the base config; every other field present overrides it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut overrides: Value = serde_json::from_str(json)?;
        let preset = match overrides.as_object_mut().and_then(|o| o.remove("preset")) {
            Some(name) => serde_json::from_value::<Preset>(name)?,
            None => Preset::Default,
        };
        let mut merged = serde_json::to_value(preset.config())?;
        merge_json(&mut merged, overrides);
        serde_json::from_value::<Self>(merged).map(Self::sanitized)
    }

    /// Sanitize the classifier and align variant counts with the sound lists,
    /// since a variant without a file cannot be played.
    pub fn sanitized(mut self) -> Self {
        self.classifier = self.classifier.sanitized();

        if self.sounds.swing.is_empty() {
            log::warn!("no swing sounds configured; using the default set");
            self.sounds.swing = SoundManifest::default().swing;
        }
        let swing_files = self.sounds.swing.len() as u32;
        if swing_files != self.classifier.swing_variants {
            let count = swing_files.min(MAX_VARIANTS);
            log::warn!(
                "swing_variants {} does not match {} swing sounds; using {}",
                self.classifier.swing_variants, swing_files, count
            );
            self.classifier.swing_variants = count;
        }

        let hit_files = self.sounds.hit.len() as u32;
        if self.classifier.hits_enabled() {
            if hit_files == 0 {
                log::warn!("no hit sounds configured; hit detection disabled");
                self.classifier.hit_threshold = None;
            } else if hit_files != self.classifier.hit_variants {
                let count = hit_files.min(MAX_VARIANTS);
                log::warn!(
                    "hit_variants {} does not match {} hit sounds; using {}",
                    self.classifier.hit_variants, hit_files, count
                );
                self.classifier.hit_variants = count;
            }
        } else if hit_files > 0 {
            log::debug!("{} hit sounds configured but hit detection is disabled", hit_files);
        }

        self
    }
}

/// Overlay `overrides` onto `base`, recursing into objects.
fn merge_json(base: &mut Value, overrides: Value) {
    if let Value::Object(base_map) = base {
        if let Value::Object(override_map) = overrides {
            for (key, value) in override_map {
                merge_json(base_map.entry(key).or_insert(Value::Null), value);
            }
            return;
        }
    }
    *base = overrides;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_five_variant_saber() {
        let config = ClassifierConfig::default();
        assert_eq!(config.swing_threshold, 8.0);
        assert_eq!(config.swing_cooldown_ms, 250.0);
        assert_eq!(config.swing_variants, 5);
        assert!(!config.hits_enabled());
    }

    #[test]
    fn presets() {
        let classic = SaberConfig::classic().sanitized();
        assert_eq!(classic.classifier.swing_threshold, 15.0);
        assert_eq!(classic.classifier.swing_cooldown_ms, 500.0);
        assert_eq!(classic.classifier.swing_variants, 1);

        let hits = SaberConfig::with_hits().sanitized();
        assert_eq!(hits.classifier.hit_threshold, Some(12.0));
        assert_eq!(hits.classifier.hit_cooldown_ms, 500.0);
        assert_eq!(hits.classifier.hit_variants, 5);
    }

    #[test]
    fn parse_empty_json_gives_defaults() {
        let config = SaberConfig::from_json("{}").unwrap();
        assert_eq!(config, SaberConfig::default());
        assert!(config.implicit_grant);
    }

    #[test]
    fn parse_partial_json() {
        let json = r#"{
            "classifier": { "swing_threshold": 10.0, "hit_threshold": 14.0 },
            "color": "green",
            "seed": 99
        }"#;
        let config = SaberConfig::from_json(json).unwrap();
        assert_eq!(config.classifier.swing_threshold, 10.0);
        assert_eq!(config.classifier.hit_threshold, Some(14.0));
        assert_eq!(config.classifier.swing_cooldown_ms, 250.0);
        assert_eq!(config.color, SaberColor::Green);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SaberConfig::from_json("{ \"color\": 3 }").is_err());
        assert!(SaberConfig::from_json("not json").is_err());
    }

    #[test]
    fn invalid_values_are_sanitized() {
        let config = ClassifierConfig {
            swing_threshold: -1.0,
            hit_threshold: Some(f32::NAN),
            swing_cooldown_ms: -5.0,
            hit_cooldown_ms: f64::INFINITY,
            swing_variants: 0,
            hit_variants: 10_000,
        }
        .sanitized();
        assert_eq!(config.swing_threshold, DEFAULT_SWING_THRESHOLD);
        assert_eq!(config.hit_threshold, Some(DEFAULT_HIT_THRESHOLD));
        assert_eq!(config.swing_cooldown_ms, 0.0);
        assert_eq!(config.hit_cooldown_ms, 0.0);
        assert_eq!(config.swing_variants, 1);
        assert_eq!(config.hit_variants, MAX_VARIANTS);
    }

    #[test]
    fn variant_counts_follow_sound_lists() {
        let json = r#"{
            "classifier": { "swing_variants": 5, "hit_threshold": 12.0, "hit_variants": 5 },
            "sounds": { "swing": ["a.wav", "b.wav"], "hit": ["h.wav"] }
        }"#;
        let config = SaberConfig::from_json(json).unwrap();
        assert_eq!(config.classifier.swing_variants, 2);
        assert_eq!(config.classifier.hit_variants, 1);
    }

    #[test]
    fn empty_sound_lists_never_leave_unplayable_variants() {
        let json = r#"{
            "classifier": { "hit_threshold": 12.0 },
            "sounds": { "hit": [], "swing": [] }
        }"#;
        let config = SaberConfig::from_json(json).unwrap();
        assert!(!config.classifier.hits_enabled());
        assert_eq!(config.sounds.swing, SoundManifest::default().swing);
        assert_eq!(config.classifier.swing_variants, 5);
    }

    #[test]
    fn preset_is_resolved_before_overrides() {
        let classic = SaberConfig::from_json(r#"{ "preset": "classic" }"#).unwrap();
        assert_eq!(classic, SaberConfig::classic().sanitized());

        let json = r#"{
            "preset": "hits",
            "classifier": { "hit_threshold": 20.0 },
            "color": "yellow"
        }"#;
        let config = SaberConfig::from_json(json).unwrap();
        assert_eq!(config.classifier.hit_threshold, Some(20.0));
        // Untouched preset fields survive the override.
        assert_eq!(config.classifier.hit_cooldown_ms, 500.0);
        assert_eq!(config.classifier.swing_threshold, 8.0);
        assert_eq!(config.color, SaberColor::Yellow);
    }

    #[test]
    fn classic_preset_overrides_keep_its_sounds() {
        let config = SaberConfig::from_json(
            r#"{ "preset": "classic", "classifier": { "swing_threshold": 12.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.classifier.swing_threshold, 12.0);
        assert_eq!(config.classifier.swing_variants, 1);
        assert_eq!(config.sounds, SoundManifest::classic());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert!(SaberConfig::from_json(r#"{ "preset": "rainbow" }"#).is_err());
        assert!(SaberConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn hit_sounds_without_threshold_stay_dead() {
        let config = SaberConfig::default().sanitized();
        assert!(!config.classifier.hits_enabled());
        assert_eq!(config.classifier.hit_variants, 5);
    }
}
