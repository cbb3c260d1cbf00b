use js_sys::{Array, Function};
use saber_engine::{BladeSignal, EffectRequest, MotionSample, SaberHost, SoundManifest};
use wasm_bindgen::prelude::*;

use crate::motion::MotionListener;

/// Browser-side collaborators: JS callbacks for sound and blade, plus the
/// `devicemotion` listener.
pub struct WebHost {
    sounds: SoundManifest,
    on_effect: Function,
    on_blade: Function,
    on_sample: fn(MotionSample),
    listener: Option<MotionListener>,
}

impl WebHost {
    /// `on_sample` is where the motion listener forwards samples.
    pub fn new(
        sounds: SoundManifest,
        on_effect: Function,
        on_blade: Function,
        on_sample: fn(MotionSample),
    ) -> Self {
        Self {
            sounds,
            on_effect,
            on_blade,
            on_sample,
            listener: None,
        }
    }
}

impl SaberHost for WebHost {
    /// Calls `on_effect(id, class, variant, path)`; `path` is null when the
    /// manifest has no file for the variant.
    fn play(&mut self, request: EffectRequest) {
        let path = match self.sounds.path_for(&request) {
            Some(path) => JsValue::from_str(path),
            None => {
                log::warn!("no sound file for {} variant {}", request.class.as_str(), request.variant);
                JsValue::NULL
            }
        };
        let args = Array::of4(
            &JsValue::from(request.sound_event().0),
            &JsValue::from_str(request.class.as_str()),
            &JsValue::from(request.variant),
            &path,
        );
        if let Err(e) = self.on_effect.apply(&JsValue::NULL, &args) {
            log::error!("on_effect callback failed: {:?}", e);
        }
    }

    /// Calls `on_blade(lit, glow, theme)`; `theme` is the full palette object.
    fn blade_changed(&mut self, blade: BladeSignal) {
        let theme = blade.color.theme();
        let theme_js = match theme.to_json().map(|json| js_sys::JSON::parse(&json)) {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                log::error!("theme JSON rejected by the browser: {:?}", e);
                JsValue::NULL
            }
            Err(e) => {
                log::error!("theme serialization failed: {}", e);
                JsValue::NULL
            }
        };
        let result = self.on_blade.call3(
            &JsValue::NULL,
            &JsValue::from_bool(blade.lit),
            &JsValue::from_str(theme.glow),
            &theme_js,
        );
        if let Err(e) = result {
            log::error!("on_blade callback failed: {:?}", e);
        }
    }

    fn subscribe_motion(&mut self) {
        match MotionListener::attach(self.on_sample) {
            Ok(listener) => self.listener = Some(listener),
            Err(e) => log::error!("failed to attach motion listener: {:?}", e),
        }
    }

    fn unsubscribe_motion(&mut self) {
        // Dropping the listener detaches it.
        self.listener = None;
    }
}
