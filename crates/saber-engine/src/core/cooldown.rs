/// Minimum spacing between two firings of one effect class.
///
/// Timestamps are monotonic milliseconds supplied by the host. The stored
/// last-trigger time never decreases, even if the host clock steps back.
#[derive(Debug, Clone)]
pub struct Cooldown {
    period_ms: f64,
    last_ms: Option<f64>,
}

impl Cooldown {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            last_ms: None,
        }
    }

    /// Whether the class may fire at `now_ms`. Always true before the first firing.
    pub fn ready(&self, now_ms: f64) -> bool {
        match self.last_ms {
            None => true,
            Some(last) => now_ms - last >= self.period_ms,
        }
    }

    /// Record a firing at `now_ms`.
    pub fn trigger(&mut self, now_ms: f64) {
        self.last_ms = Some(match self.last_ms {
            Some(last) => last.max(now_ms),
            None => now_ms,
        });
    }

    /// Fire if ready. Returns whether it fired.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if self.ready(now_ms) {
            self.trigger(now_ms);
            true
        } else {
            false
        }
    }

    /// Time of the last firing, if any.
    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_firing_is_never_blocked() {
        let mut cd = Cooldown::new(250.0);
        assert!(cd.try_fire(0.0));
        assert_eq!(cd.last_ms(), Some(0.0));
    }

    #[test]
    fn blocks_inside_window() {
        let mut cd = Cooldown::new(250.0);
        assert!(cd.try_fire(0.0));
        assert!(!cd.try_fire(100.0));
        assert!(!cd.try_fire(249.9));
        assert!(cd.try_fire(250.0)); // boundary is inclusive
        assert_eq!(cd.last_ms(), Some(250.0));
    }

    #[test]
    fn rejected_samples_do_not_extend_window() {
        let mut cd = Cooldown::new(250.0);
        cd.try_fire(0.0);
        cd.try_fire(200.0);
        assert!(cd.ready(260.0));
    }

    #[test]
    fn last_time_never_decreases() {
        let mut cd = Cooldown::new(0.0);
        cd.trigger(500.0);
        cd.trigger(100.0);
        assert_eq!(cd.last_ms(), Some(500.0));
    }
}
