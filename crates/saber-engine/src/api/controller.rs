use crate::api::config::SaberConfig;
use crate::api::host::SaberHost;
use crate::api::types::{BladeSignal, EffectRequest};
use crate::components::theme::SaberColor;
use crate::core::permission::{PermissionGate, PermissionOutcome, PermissionState, PermissionTicket};
use crate::core::power::{PowerState, PowerSwitch};
use crate::input::motion::MotionSample;
use crate::systems::classifier::MotionClassifier;
use crate::systems::diagnostics::{round2, Diagnostics};

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub power: PowerState,
    /// Set when this toggle kicked off the first permission request.
    /// The host should prompt and report back via
    /// [`SaberController::resolve_permission`]; the toggle itself is done.
    pub permission_request: Option<PermissionTicket>,
}

/// The motion interaction controller.
///
/// Owns all widget state. Every entry point is synchronous; the only
/// suspending step (the permission prompt) happens in the host between
/// [`request_permission`](Self::request_permission) and
/// [`resolve_permission`](Self::resolve_permission).
pub struct SaberController {
    gate: PermissionGate,
    power: PowerSwitch,
    classifier: MotionClassifier,
    color: SaberColor,
    subscribed: bool,
    torn_down: bool,
}

impl SaberController {
    /// `seed` is used unless the config pins one.
    pub fn new(config: SaberConfig, seed: u64) -> Self {
        let config = config.sanitized();
        let seed = config.seed.unwrap_or(seed);
        Self {
            gate: PermissionGate::new(config.implicit_grant),
            power: PowerSwitch::new(),
            classifier: MotionClassifier::new(config.classifier, seed),
            color: config.color,
            subscribed: false,
            torn_down: false,
        }
    }

    pub fn permission(&self) -> PermissionState {
        self.gate.state()
    }

    pub fn power(&self) -> PowerState {
        self.power.state()
    }

    pub fn color(&self) -> SaberColor {
        self.color
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// A torn-down controller never reports a lit blade.
    pub fn blade(&self) -> BladeSignal {
        BladeSignal {
            lit: self.power.state().is_on() && !self.torn_down,
            color: self.color,
        }
    }

    /// Begin a permission request. `None` when the state is already settled,
    /// a request is in flight, or the controller is torn down.
    pub fn request_permission(&mut self) -> Option<PermissionTicket> {
        if self.torn_down {
            return None;
        }
        self.gate.begin()
    }

    /// Apply the host's permission answer. Subscribes to motion on grant.
    /// Stale tickets (and any answer after teardown) are ignored.
    pub fn resolve_permission(
        &mut self,
        ticket: PermissionTicket,
        outcome: PermissionOutcome,
        host: &mut impl SaberHost,
    ) -> PermissionState {
        if self.torn_down {
            log::debug!("permission answer after teardown ignored");
            return self.gate.state();
        }
        if let Some(PermissionState::Granted) = self.gate.resolve(ticket, outcome) {
            self.subscribe(host);
        }
        self.gate.state()
    }

    /// Flip the power switch, emitting exactly one Activate or Deactivate.
    pub fn toggle(&mut self, host: &mut impl SaberHost) -> Toggle {
        if self.torn_down {
            return Toggle {
                power: self.power.state(),
                permission_request: None,
            };
        }

        let permission_request = if self.gate.state() == PermissionState::Unknown {
            self.gate.begin()
        } else {
            None
        };

        let (power, effect) = self.power.toggle();
        log::debug!("saber {}", power.as_str());
        host.play(effect);
        host.blade_changed(self.blade());

        Toggle {
            power,
            permission_request,
        }
    }

    /// Feed one motion sample taken at `now_ms` (monotonic milliseconds).
    /// Ignored unless powered on and permission is granted.
    pub fn on_sample(
        &mut self,
        sample: MotionSample,
        now_ms: f64,
        host: &mut impl SaberHost,
    ) -> Option<EffectRequest> {
        if self.torn_down || !self.power.state().is_on() || !self.gate.state().is_granted() {
            return None;
        }
        let request = self.classifier.classify(sample, now_ms)?;
        host.play(request);
        Some(request)
    }

    /// Change the blade color and tell the renderer.
    pub fn set_color(&mut self, color: SaberColor, host: &mut impl SaberHost) {
        if self.torn_down || self.color == color {
            return;
        }
        self.color = color;
        host.blade_changed(self.blade());
    }

    /// The host lost sensor access: deny and release the subscription.
    pub fn revoke_permission(&mut self, host: &mut impl SaberHost) {
        if self.torn_down {
            return;
        }
        if self.gate.revoke() {
            self.unsubscribe(host);
        }
    }

    /// Release the subscription, drop any in-flight permission request and
    /// extinguish a lit blade. Every later call is a no-op.
    pub fn teardown(&mut self, host: &mut impl SaberHost) {
        if self.torn_down {
            return;
        }
        let was_lit = self.blade().lit;
        self.unsubscribe(host);
        self.gate.invalidate();
        self.torn_down = true;
        if was_lit {
            host.blade_changed(self.blade());
        }
        log::debug!("saber torn down");
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            permission: self.gate.state(),
            power: self.power.state(),
            acceleration: self.classifier.last_magnitude().map(round2).unwrap_or(0.0),
            last_swing_ms: self.classifier.last_swing_ms(),
            last_hit_ms: self.classifier.last_hit_ms(),
            swings: self.classifier.swing_count(),
            hits: self.classifier.hit_count(),
            color: self.color,
            subscribed: self.subscribed,
        }
    }

    fn subscribe(&mut self, host: &mut impl SaberHost) {
        if !self.subscribed {
            host.subscribe_motion();
            self.subscribed = true;
        }
    }

    fn unsubscribe(&mut self, host: &mut impl SaberHost) {
        if self.subscribed {
            host.unsubscribe_motion();
            self.subscribed = false;
        }
    }
}
