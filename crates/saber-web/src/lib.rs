//! Browser exports for the saber controller.
//!
//! ```js
//! import init, { saber_init, saber_toggle } from "./pkg/saber_web.js";
//!
//! await init();
//! saber_init(null, (id, cls, variant, path) => play(path), (lit, glow, theme) => draw(lit, theme));
//! button.onclick = () => saber_toggle();
//! ```

pub mod host;
pub mod motion;
pub mod permission;
pub mod runner;

use std::cell::{Cell, RefCell};

use js_sys::Function;
use saber_engine::{MotionSample, PermissionOutcome, PermissionTicket, Rng, SaberColor, SaberConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub use runner::SaberRunner;

thread_local! {
    static RUNNER: RefCell<Option<SaberRunner>> = RefCell::new(None);
    static NEXT_SESSION: Cell<u32> = Cell::new(0);
}

/// Run `f` against the live runner. `None` if there is no runner, or if it is
/// already borrowed (a JS callback re-entering an export).
fn with_runner<R>(f: impl FnOnce(&mut SaberRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut borrow) => borrow.as_mut().map(f),
        Err(_) => {
            log::warn!("saber: re-entrant call ignored");
            None
        }
    })
}

/// Put `value` into `slot` unless the slot is currently borrowed.
fn install<T>(slot: &RefCell<Option<T>>, value: T) -> bool {
    match slot.try_borrow_mut() {
        Ok(mut borrow) => {
            *borrow = Some(value);
            true
        }
        Err(_) => false,
    }
}

/// Monotonic milliseconds for cooldowns.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn browser_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    Rng::mix_seed((hi << 32) | lo, js_sys::Date::now() as u64)
}

fn dispatch_sample(sample: MotionSample) {
    let now = now_ms();
    with_runner(|r| r.on_sample(sample, now));
}

fn parse_config(json: Option<&str>) -> SaberConfig {
    match json {
        Some(json) => SaberConfig::from_json(json).unwrap_or_else(|e| {
            log::error!("saber: invalid config ({}); using defaults", e);
            SaberConfig::default()
        }),
        None => SaberConfig::default(),
    }
}

/// Apply a permission answer if the runner that asked is still alive.
fn finish_permission(session: u32, ticket: PermissionTicket, outcome: PermissionOutcome) {
    let applied = with_runner(|r| {
        if r.session() == session {
            Some(r.finish_permission(ticket, outcome))
        } else {
            None
        }
    })
    .flatten();
    if applied.is_none() {
        log::debug!("saber: permission answer arrived after teardown; dropped");
    }
}

fn spawn_permission_request(session: u32, ticket: PermissionTicket) {
    spawn_local(async move {
        let outcome = permission::request_motion_permission().await;
        finish_permission(session, ticket, outcome);
    });
}

/// Create the controller. Replaces (and tears down) any previous one.
///
/// - `config_json`: optional JSON config; invalid JSON falls back to defaults.
/// - `on_effect(id, class, variant, path)`: play a sound.
/// - `on_blade(lit, glow, theme)`: redraw the blade; `theme` holds
///   `name`, `glow`, `background`, `backdrop`, `title` and `swatch`.
#[wasm_bindgen]
pub fn saber_init(config_json: Option<String>, on_effect: Function, on_blade: Function) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = parse_config(config_json.as_deref());
    let seed = config.seed.unwrap_or_else(browser_seed);
    let session = NEXT_SESSION.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });

    saber_destroy();
    let runner = SaberRunner::new(config, seed, session, on_effect, on_blade, dispatch_sample);
    // Announce only once the runner is live, so a rejected runner never
    // reaches the page.
    if !RUNNER.with(|cell| install(cell, runner)) {
        log::warn!("saber: init during callback ignored");
        return;
    }
    with_runner(|r| r.announce());
    log::info!("saber: initialized");
}

/// Flip the power switch. Returns whether the blade is now lit.
/// The first toggle also asks for motion permission in the background.
#[wasm_bindgen]
pub fn saber_toggle() -> bool {
    let Some((ticket, lit, session)) = with_runner(|r| (r.toggle(), r.is_lit(), r.session()))
    else {
        return false;
    };
    if let Some(ticket) = ticket {
        spawn_permission_request(session, ticket);
    }
    lit
}

/// Explicitly ask for motion permission (the "enable motion" button).
/// Resolves to the permission state name.
#[wasm_bindgen]
pub async fn saber_enable_motion() -> JsValue {
    if let Some((Some(ticket), session)) = with_runner(|r| (r.begin_permission(), r.session())) {
        let outcome = permission::request_motion_permission().await;
        finish_permission(session, ticket, outcome);
    }
    JsValue::from_str(&saber_permission())
}

/// Current permission state: "unknown", "granted", "denied" or "unsupported".
#[wasm_bindgen]
pub fn saber_permission() -> String {
    with_runner(|r| r.permission().as_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Change blade color by name. Returns false for unknown names.
#[wasm_bindgen]
pub fn saber_set_color(name: &str) -> bool {
    match SaberColor::from_name(name) {
        Some(color) => with_runner(|r| r.set_color(color)).is_some(),
        None => {
            log::warn!("saber: unknown color {:?}", name);
            false
        }
    }
}

/// The page lost motion access; stop listening.
#[wasm_bindgen]
pub fn saber_revoke() {
    with_runner(|r| r.revoke());
}

/// Tear down the controller and release the motion listener.
#[wasm_bindgen]
pub fn saber_destroy() {
    let runner = RUNNER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut borrow) => borrow.take(),
        Err(_) => {
            log::warn!("saber: destroy during callback ignored");
            None
        }
    });
    if let Some(mut runner) = runner {
        runner.destroy();
        log::info!("saber: destroyed");
    }
}

#[wasm_bindgen]
pub fn saber_is_lit() -> bool {
    with_runner(|r| r.is_lit()).unwrap_or(false)
}

/// Debug overlay snapshot as JSON, or null before init.
#[wasm_bindgen]
pub fn saber_diagnostics() -> Option<String> {
    let diagnostics = with_runner(|r| r.diagnostics())?;
    match diagnostics.to_json() {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("saber: diagnostics serialization failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(parse_config(None), SaberConfig::default());
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        assert_eq!(parse_config(Some("{ not json")), SaberConfig::default());
    }

    #[test]
    fn config_json_is_applied() {
        let config = parse_config(Some(r#"{ "color": "red", "implicit_grant": false }"#));
        assert_eq!(config.color, SaberColor::Red);
        assert!(!config.implicit_grant);
    }

    #[test]
    fn install_is_rejected_while_slot_is_borrowed() {
        let slot: RefCell<Option<u32>> = RefCell::new(Some(1));
        {
            let _held = slot.borrow_mut();
            assert!(!install(&slot, 2));
        }
        assert_eq!(*slot.borrow(), Some(1));
        assert!(install(&slot, 3));
        assert_eq!(*slot.borrow(), Some(3));
    }

    #[test]
    fn exports_before_init_are_no_ops() {
        assert_eq!(saber_permission(), "unknown");
        assert!(!saber_is_lit());
        assert!(!saber_toggle());
        assert!(!saber_set_color("red"));
        assert!(!saber_set_color("chartreuse"));
        assert_eq!(saber_diagnostics(), None);
        saber_revoke();
        saber_destroy();
    }
}
