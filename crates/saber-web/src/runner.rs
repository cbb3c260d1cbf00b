use js_sys::Function;
use saber_engine::{
    Diagnostics, MotionSample, PermissionOutcome, PermissionState, PermissionTicket,
    SaberColor, SaberConfig, SaberController, SaberHost,
};

use crate::host::WebHost;

/// Owns one controller and its browser host.
///
/// The exported free functions keep a single runner in a `thread_local!`.
pub struct SaberRunner {
    controller: SaberController,
    host: WebHost,
    /// Distinguishes this runner from earlier ones, so a permission answer
    /// that outlives its runner is dropped.
    session: u32,
}

impl SaberRunner {
    pub fn new(
        config: SaberConfig,
        seed: u64,
        session: u32,
        on_effect: Function,
        on_blade: Function,
        on_sample: fn(MotionSample),
    ) -> Self {
        let config = config.sanitized();
        let host = WebHost::new(config.sounds.clone(), on_effect, on_blade, on_sample);
        Self {
            controller: SaberController::new(config, seed),
            host,
            session,
        }
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    /// Push the initial blade state to the renderer.
    pub fn announce(&mut self) {
        let blade = self.controller.blade();
        self.host.blade_changed(blade);
    }

    pub fn toggle(&mut self) -> Option<PermissionTicket> {
        self.controller.toggle(&mut self.host).permission_request
    }

    pub fn begin_permission(&mut self) -> Option<PermissionTicket> {
        self.controller.request_permission()
    }

    pub fn finish_permission(
        &mut self,
        ticket: PermissionTicket,
        outcome: PermissionOutcome,
    ) -> PermissionState {
        self.controller.resolve_permission(ticket, outcome, &mut self.host)
    }

    pub fn on_sample(&mut self, sample: MotionSample, now_ms: f64) {
        self.controller.on_sample(sample, now_ms, &mut self.host);
    }

    pub fn set_color(&mut self, color: SaberColor) {
        self.controller.set_color(color, &mut self.host);
    }

    pub fn revoke(&mut self) {
        self.controller.revoke_permission(&mut self.host);
    }

    pub fn destroy(&mut self) {
        self.controller.teardown(&mut self.host);
    }

    pub fn permission(&self) -> PermissionState {
        self.controller.permission()
    }

    pub fn is_lit(&self) -> bool {
        self.controller.blade().lit
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.controller.diagnostics()
    }
}
