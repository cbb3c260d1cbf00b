//! Swing/hit detection from raw acceleration.
//!
//! Each sample is reduced to its magnitude and checked against the hit
//! threshold first, then the swing threshold. A class only fires when its
//! own cooldown has elapsed; samples arriving inside the window are dropped.

use crate::api::config::ClassifierConfig;
use crate::api::types::EffectRequest;
use crate::core::cooldown::Cooldown;
use crate::core::rng::Rng;
use crate::input::motion::MotionSample;

/// Gesture a sample was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swing,
    Hit,
}

pub struct MotionClassifier {
    config: ClassifierConfig,
    swing: Cooldown,
    hit: Cooldown,
    rng: Rng,
    last_magnitude: Option<f32>,
    swings: u32,
    hits: u32,
}

impl MotionClassifier {
    pub fn new(config: ClassifierConfig, seed: u64) -> Self {
        Self {
            swing: Cooldown::new(config.swing_cooldown_ms),
            hit: Cooldown::new(config.hit_cooldown_ms),
            rng: Rng::new(seed),
            config,
            last_magnitude: None,
            swings: 0,
            hits: 0,
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one sample taken at `now_ms`.
    /// Returns the effect to play, with a freshly drawn variant.
    pub fn classify(&mut self, sample: MotionSample, now_ms: f64) -> Option<EffectRequest> {
        let magnitude = sample.magnitude();
        self.last_magnitude = Some(magnitude);

        let gesture = self.gesture(magnitude, now_ms)?;
        let request = match gesture {
            Gesture::Hit => {
                self.hits += 1;
                EffectRequest::hit(self.rng.next_int(self.config.hit_variants))
            }
            Gesture::Swing => {
                self.swings += 1;
                EffectRequest::swing(self.rng.next_int(self.config.swing_variants))
            }
        };
        log::debug!(
            "{} (magnitude {:.2}, variant {})",
            request.class.as_str(),
            magnitude,
            request.variant
        );
        Some(request)
    }

    fn gesture(&mut self, magnitude: f32, now_ms: f64) -> Option<Gesture> {
        if let Some(hit_threshold) = self.config.hit_threshold {
            if magnitude > hit_threshold && self.hit.try_fire(now_ms) {
                return Some(Gesture::Hit);
            }
        }
        if magnitude > self.config.swing_threshold && self.swing.try_fire(now_ms) {
            return Some(Gesture::Swing);
        }
        None
    }

    /// Magnitude of the most recent sample, if any.
    pub fn last_magnitude(&self) -> Option<f32> {
        self.last_magnitude
    }

    pub fn last_swing_ms(&self) -> Option<f64> {
        self.swing.last_ms()
    }

    pub fn last_hit_ms(&self) -> Option<f64> {
        self.hit.last_ms()
    }

    pub fn swing_count(&self) -> u32 {
        self.swings
    }

    pub fn hit_count(&self) -> u32 {
        self.hits
    }
}
