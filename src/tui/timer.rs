//! Cancellable one-shot countdowns
//!
//! All suspension points in the application are countdowns checked on each
//! tick: the email validation debounce, the simulated account creation, and
//! the post-success redirect. A countdown lives in an `Option` slot owned by
//! the screen that started it; replacing the slot restarts the countdown
//! (last-write-wins) and dropping the screen state cancels it outright, so a
//! timer can never fire against a discarded screen instance.

use std::time::{Duration, Instant};

/// A one-shot countdown with an absolute deadline
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    deadline: Instant,
}

impl Countdown {
    /// Start a countdown that elapses after `duration`
    pub fn start(duration: Duration) -> Self {
        Self {
            deadline: Instant::now() + duration,
        }
    }

    /// Whether the deadline has passed
    pub fn is_elapsed(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Take an elapsed countdown out of its slot
///
/// Returns true exactly once per started countdown, the first time it is
/// polled after its deadline; pending or empty slots return false.
pub fn poll(slot: &mut Option<Countdown>) -> bool {
    match slot {
        Some(countdown) if countdown.is_elapsed() => {
            *slot = None;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_elapses_immediately() {
        let countdown = Countdown::start(Duration::ZERO);
        assert!(countdown.is_elapsed());
    }

    #[test]
    fn test_pending_countdown_not_elapsed() {
        let countdown = Countdown::start(Duration::from_secs(60));
        assert!(!countdown.is_elapsed());
    }

    #[test]
    fn test_poll_fires_once() {
        let mut slot = Some(Countdown::start(Duration::ZERO));
        assert!(poll(&mut slot));
        assert!(slot.is_none());
        assert!(!poll(&mut slot));
    }

    #[test]
    fn test_poll_leaves_pending_slot_alone() {
        let mut slot = Some(Countdown::start(Duration::from_secs(60)));
        assert!(!poll(&mut slot));
        assert!(slot.is_some());
    }

    #[test]
    fn test_restart_replaces_deadline() {
        let mut slot = Some(Countdown::start(Duration::ZERO));
        // Restart before polling: the old deadline must not fire
        slot = Some(Countdown::start(Duration::from_secs(60)));
        assert!(!poll(&mut slot));
    }
}
