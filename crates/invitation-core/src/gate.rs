//! Envelope entry gate.
//!
//! `Closed -> Opening` on the guest's click, `Opening -> Open` once the
//! opening animation has had `delay` to play. There is no way back.

use std::time::{Duration, Instant};

/// Observable gate phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePhase {
    #[default]
    Closed,
    Opening,
    Open,
}

impl GatePhase {
    /// CSS modifier for the envelope overlay
    pub fn class(&self) -> &'static str {
        match self {
            GatePhase::Closed => "envelope--closed",
            GatePhase::Opening => "envelope--opening",
            GatePhase::Open => "envelope--open",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Closed,
    Opening { since: Instant },
    Open,
}

/// One-shot reveal gate
#[derive(Debug, Clone)]
pub struct EntryGate {
    state: State,
    delay: Duration,
}

impl EntryGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: State::Closed,
            delay,
        }
    }

    pub fn phase(&self) -> GatePhase {
        match self.state {
            State::Closed => GatePhase::Closed,
            State::Opening { .. } => GatePhase::Opening,
            State::Open => GatePhase::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open)
    }

    /// Length of the opening transition
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start opening. Returns `true` only for the call that left `Closed`.
    pub fn trigger(&mut self, now: Instant) -> bool {
        match self.state {
            State::Closed => {
                self.state = State::Opening { since: now };
                tracing::info!(delay_ms = self.delay.as_millis() as u64, "Envelope opening");
                true
            }
            _ => false,
        }
    }

    /// Finish opening once the delay has elapsed. Returns `true` only for the
    /// call that entered `Open`.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.state {
            State::Opening { since } if now.saturating_duration_since(since) >= self.delay => {
                self.state = State::Open;
                tracing::info!("Envelope open");
                true
            }
            _ => false,
        }
    }

    /// Time left before `advance` can open the gate; `None` unless opening.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            State::Opening { since } => {
                Some(self.delay.saturating_sub(now.saturating_duration_since(since)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn closed_until_triggered() {
        let mut gate = EntryGate::new(DELAY);
        let t0 = Instant::now();
        assert_eq!(gate.phase(), GatePhase::Closed);
        assert!(!gate.advance(t0 + DELAY * 10));
        assert_eq!(gate.phase(), GatePhase::Closed);
    }

    #[test]
    fn opens_after_delay() {
        let mut gate = EntryGate::new(DELAY);
        let t0 = Instant::now();

        assert!(gate.trigger(t0));
        assert_eq!(gate.phase(), GatePhase::Opening);
        assert_eq!(
            gate.remaining(t0 + Duration::from_millis(500)),
            Some(Duration::from_millis(1000))
        );

        assert!(!gate.advance(t0 + Duration::from_millis(1499)));
        assert_eq!(gate.phase(), GatePhase::Opening);

        assert!(gate.advance(t0 + DELAY));
        assert!(gate.is_open());
        assert_eq!(gate.remaining(t0 + DELAY), None);
    }

    #[test]
    fn second_trigger_is_ignored() {
        let mut gate = EntryGate::new(DELAY);
        let t0 = Instant::now();

        assert!(gate.trigger(t0));
        // A later click must not restart the timer
        assert!(!gate.trigger(t0 + Duration::from_millis(1000)));
        assert!(gate.advance(t0 + DELAY));
    }

    #[test]
    fn open_is_terminal() {
        let mut gate = EntryGate::new(DELAY);
        let t0 = Instant::now();
        gate.trigger(t0);
        gate.advance(t0 + DELAY);

        assert!(!gate.trigger(t0 + DELAY * 2));
        assert!(!gate.advance(t0 + DELAY * 3));
        assert_eq!(gate.phase(), GatePhase::Open);
    }

    #[test]
    fn zero_delay_opens_on_first_advance() {
        let mut gate = EntryGate::new(Duration::ZERO);
        let t0 = Instant::now();
        gate.trigger(t0);
        assert!(gate.advance(t0));
    }

    #[test]
    fn phase_classes() {
        assert_eq!(GatePhase::Closed.class(), "envelope--closed");
        assert_eq!(GatePhase::Opening.class(), "envelope--opening");
        assert_eq!(GatePhase::Open.class(), "envelope--open");
    }
}
