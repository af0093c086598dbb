//! Keyed one-shot effect timers
//!
//! Each effect kind has at most one pending deadline. Scheduling a kind that
//! is already pending moves its deadline instead of stacking a second one, so
//! a shake re-triggered mid-animation simply restarts.

const EFFECT_KINDS: usize = 2;

/// Transient visual effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectKind {
    /// The "Yes" button wobbles after a dismiss attempt
    Shake,
    /// Hides the hostile control until its entrance delay passes
    Reveal,
}

impl EffectKind {
    pub const ALL: [EffectKind; EFFECT_KINDS] = [EffectKind::Shake, EffectKind::Reveal];

    #[inline]
    fn index(self) -> usize {
        match self {
            EffectKind::Shake => 0,
            EffectKind::Reveal => 1,
        }
    }

    /// CSS class the page toggles while the effect runs. `Reveal` has none;
    /// it hides the hostile control instead.
    pub fn as_class(&self) -> Option<&'static str> {
        match self {
            EffectKind::Shake => Some("shake"),
            EffectKind::Reveal => None,
        }
    }
}

/// Pending deadlines, one slot per effect kind (ms on the caller's clock)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectTimers {
    deadlines: [Option<f64>; EFFECT_KINDS],
}

impl EffectTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` to fire `delay_ms` after `now_ms`. Returns the deadline it
    /// superseded, if any.
    pub fn schedule(&mut self, kind: EffectKind, now_ms: f64, delay_ms: f64) -> Option<f64> {
        self.deadlines[kind.index()].replace(now_ms + delay_ms.max(0.0))
    }

    pub fn cancel(&mut self, kind: EffectKind) -> bool {
        self.deadlines[kind.index()].take().is_some()
    }

    pub fn cancel_all(&mut self) {
        self.deadlines = Default::default();
    }

    pub fn is_pending(&self, kind: EffectKind) -> bool {
        self.deadlines[kind.index()].is_some()
    }

    /// Fire every effect whose deadline has passed
    pub fn expire(&mut self, now_ms: f64) -> Vec<EffectKind> {
        let mut fired = Vec::new();
        for kind in EffectKind::ALL {
            let slot = &mut self.deadlines[kind.index()];
            if slot.is_some_and(|deadline| deadline <= now_ms) {
                *slot = None;
                fired.push(kind);
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_after_deadline() {
        let mut timers = EffectTimers::new();
        timers.schedule(EffectKind::Shake, 1000.0, 400.0);

        assert!(timers.expire(1399.0).is_empty());
        assert!(timers.is_pending(EffectKind::Shake));
        assert_eq!(timers.expire(1400.0), vec![EffectKind::Shake]);
        assert!(!timers.is_pending(EffectKind::Shake));
        assert!(timers.expire(5000.0).is_empty());
    }

    #[test]
    fn test_reschedule_supersedes() {
        let mut timers = EffectTimers::new();
        assert_eq!(timers.schedule(EffectKind::Shake, 0.0, 400.0), None);
        assert_eq!(timers.schedule(EffectKind::Shake, 300.0, 400.0), Some(400.0));

        // The first deadline no longer fires
        assert!(timers.expire(450.0).is_empty());
        assert_eq!(timers.expire(700.0), vec![EffectKind::Shake]);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut timers = EffectTimers::new();
        timers.schedule(EffectKind::Reveal, 0.0, 600.0);
        timers.schedule(EffectKind::Shake, 0.0, 400.0);

        assert!(timers.cancel(EffectKind::Shake));
        assert!(!timers.cancel(EffectKind::Shake));
        assert!(timers.is_pending(EffectKind::Reveal));
        assert!(timers.expire(599.0).is_empty());
        assert_eq!(timers.expire(600.0), vec![EffectKind::Reveal]);
    }

    #[test]
    fn test_expire_reports_in_kind_order() {
        let mut timers = EffectTimers::new();
        timers.schedule(EffectKind::Reveal, 0.0, 10.0);
        timers.schedule(EffectKind::Shake, 0.0, 20.0);
        assert_eq!(
            timers.expire(100.0),
            vec![EffectKind::Shake, EffectKind::Reveal]
        );
    }

    #[test]
    fn test_only_shake_has_a_class() {
        assert_eq!(EffectKind::Shake.as_class(), Some("shake"));
        assert_eq!(EffectKind::Reveal.as_class(), None);
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = EffectTimers::new();
        timers.schedule(EffectKind::Reveal, 0.0, 10.0);
        timers.schedule(EffectKind::Shake, 0.0, 20.0);
        timers.cancel_all();
        assert_eq!(timers, EffectTimers::new());
    }
}
