//! Motion permission prompt.
//!
//! Some browsers gate `devicemotion` behind `DeviceMotionEvent.requestPermission()`,
//! which must be called from a user gesture and resolves to "granted" or
//! "denied". Others deliver events without asking, and some have no motion
//! API at all.

use js_sys::{Function, Promise, Reflect};
use saber_engine::PermissionOutcome;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Ask the browser for motion access. Never fails; errors become
/// [`PermissionOutcome::Failed`].
pub async fn request_motion_permission() -> PermissionOutcome {
    let global = js_sys::global();
    let ctor = match Reflect::get(&global, &JsValue::from_str("DeviceMotionEvent")) {
        Ok(ctor) if !ctor.is_undefined() && !ctor.is_null() => ctor,
        Ok(_) => return PermissionOutcome::Unavailable,
        Err(e) => return PermissionOutcome::Failed(describe(&e)),
    };

    let request = match Reflect::get(&ctor, &JsValue::from_str("requestPermission")) {
        Ok(request) => request,
        Err(e) => return PermissionOutcome::Failed(describe(&e)),
    };
    let Some(request) = request.dyn_ref::<Function>() else {
        return PermissionOutcome::NoPromptRequired;
    };

    let promise = match request.call0(&ctor) {
        Ok(value) => value,
        Err(e) => return PermissionOutcome::Failed(describe(&e)),
    };
    let promise = match promise.dyn_into::<Promise>() {
        Ok(promise) => promise,
        Err(value) => {
            return PermissionOutcome::Failed(format!(
                "requestPermission returned {}",
                describe(&value)
            ))
        }
    };

    match JsFuture::from(promise).await {
        Ok(answer) => outcome_from_answer(answer.as_string().as_deref()),
        Err(e) => PermissionOutcome::Failed(describe(&e)),
    }
}

/// Map the prompt's resolved value. Only "granted" grants.
pub fn outcome_from_answer(answer: Option<&str>) -> PermissionOutcome {
    match answer {
        Some("granted") => PermissionOutcome::Approved,
        _ => PermissionOutcome::Refused,
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_granted_approves() {
        assert_eq!(outcome_from_answer(Some("granted")), PermissionOutcome::Approved);
        assert_eq!(outcome_from_answer(Some("denied")), PermissionOutcome::Refused);
        assert_eq!(outcome_from_answer(Some("default")), PermissionOutcome::Refused);
        assert_eq!(outcome_from_answer(None), PermissionOutcome::Refused);
    }
}
