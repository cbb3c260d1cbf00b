use saber_engine::MotionSample;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DeviceMotionEvent, Window};

const EVENT: &str = "devicemotion";

/// A live `devicemotion` listener on `window`.
/// The listener is removed when this is dropped.
pub struct MotionListener {
    window: Window,
    callback: Closure<dyn FnMut(DeviceMotionEvent)>,
}

impl MotionListener {
    /// Attach a listener that forwards every event carrying acceleration data.
    pub fn attach(mut on_sample: impl FnMut(MotionSample) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut(DeviceMotionEvent)>::new(move |event: DeviceMotionEvent| {
            if let Some(sample) = sample_from_event(&event) {
                on_sample(sample);
            }
        });
        window.add_event_listener_with_callback(EVENT, callback.as_ref().unchecked_ref())?;
        log::debug!("motion listener attached");
        Ok(Self { window, callback })
    }
}

impl Drop for MotionListener {
    fn drop(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback(EVENT, self.callback.as_ref().unchecked_ref());
        match removed {
            Ok(()) => log::debug!("motion listener removed"),
            Err(e) => log::warn!("failed to remove motion listener: {:?}", e),
        }
    }
}

/// Events without an `acceleration` object carry nothing to classify.
fn sample_from_event(event: &DeviceMotionEvent) -> Option<MotionSample> {
    let accel = event.acceleration()?;
    Some(MotionSample::from_axes(
        accel.x().map(|v| v as f32),
        accel.y().map(|v| v as f32),
        accel.z().map(|v| v as f32),
    ))
}
