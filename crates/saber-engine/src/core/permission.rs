use serde::Serialize;

/// Authorization to read device motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    #[default]
    Unknown,
    Granted,
    Denied,
    /// The platform has no motion API and implicit grants are disabled.
    Unsupported,
}

impl PermissionState {
    pub fn is_granted(self) -> bool {
        self == PermissionState::Granted
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionState::Unknown => "unknown",
            PermissionState::Granted => "granted",
            PermissionState::Denied => "denied",
            PermissionState::Unsupported => "unsupported",
        }
    }
}

/// What the host platform reported for a permission request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionOutcome {
    /// The user approved the prompt.
    Approved,
    /// The user refused the prompt.
    Refused,
    /// Motion data is readable without a prompt.
    NoPromptRequired,
    /// The platform exposes no motion API at all.
    Unavailable,
    /// The prompt itself failed.
    Failed(String),
}

/// Handle for one in-flight permission request.
/// Results presented with a stale ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct PermissionTicket {
    generation: u32,
}

/// One-shot authorization gate.
///
/// `Unknown` moves to a terminal state exactly once. A request is started
/// with [`PermissionGate::begin`], the host performs the (possibly async)
/// prompt, and the result is applied with [`PermissionGate::resolve`].
#[derive(Debug, Clone)]
pub struct PermissionGate {
    state: PermissionState,
    pending: Option<u32>,
    generation: u32,
    implicit_grant: bool,
}

impl PermissionGate {
    /// `implicit_grant` decides whether a platform without any motion API
    /// counts as granted.
    pub fn new(implicit_grant: bool) -> Self {
        Self {
            state: PermissionState::Unknown,
            pending: None,
            generation: 0,
            implicit_grant,
        }
    }

    pub fn state(&self) -> PermissionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a request. Returns `None` if the state is already settled or a
    /// request is in flight.
    pub fn begin(&mut self) -> Option<PermissionTicket> {
        if self.state != PermissionState::Unknown || self.pending.is_some() {
            return None;
        }
        self.pending = Some(self.generation);
        Some(PermissionTicket {
            generation: self.generation,
        })
    }

    /// Apply the host's answer. Returns the new state, or `None` when the
    /// ticket is stale and the answer was dropped.
    pub fn resolve(
        &mut self,
        ticket: PermissionTicket,
        outcome: PermissionOutcome,
    ) -> Option<PermissionState> {
        if self.pending != Some(ticket.generation) {
            log::debug!("discarding stale motion permission result: {:?}", outcome);
            return None;
        }
        self.pending = None;

        let state = match outcome {
            PermissionOutcome::Approved => PermissionState::Granted,
            PermissionOutcome::Refused => PermissionState::Denied,
            PermissionOutcome::NoPromptRequired => PermissionState::Granted,
            PermissionOutcome::Unavailable if self.implicit_grant => PermissionState::Granted,
            PermissionOutcome::Unavailable => PermissionState::Unsupported,
            PermissionOutcome::Failed(reason) => {
                log::warn!("motion permission request failed: {}", reason);
                PermissionState::Denied
            }
        };
        log::info!("motion permission: {}", state.as_str());
        self.state = state;
        Some(state)
    }

    /// The host lost sensor access. Returns true if access was revoked.
    pub fn revoke(&mut self) -> bool {
        if self.state.is_granted() {
            log::info!("motion permission revoked");
            self.state = PermissionState::Denied;
            true
        } else {
            false
        }
    }

    /// Drop any in-flight request; its ticket becomes stale.
    pub fn invalidate(&mut self) {
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
    }
}
