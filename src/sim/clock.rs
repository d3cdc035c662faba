//! Time sources and the session clock behind the parental lock
//!
//! Timestamps are `Duration`s on an arbitrary monotonic timeline. The game
//! only ever compares them with each other, so a test clock can start at zero.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to (tests, headless simulation)
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new(start: Duration) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Elapsed play time since the last reset
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionClock {
    /// `None` until the first reset (the secret code has not been set yet)
    started_at: Option<Duration>,
}

impl SessionClock {
    pub fn new() -> Self {
        Self { started_at: None }
    }

    /// Restart the session at `now`
    pub fn reset(&mut self, now: Duration) {
        self.started_at = Some(now);
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Time since the last reset (zero before the first one)
    pub fn elapsed(&self, now: Duration) -> Duration {
        self.started_at
            .map(|start| now.saturating_sub(start))
            .unwrap_or_default()
    }

    /// True once `limit` has passed since the last reset
    pub fn has_expired(&self, now: Duration, limit: Duration) -> bool {
        self.is_running() && self.elapsed(now) >= limit
    }

    /// Time left before `limit` is reached
    pub fn remaining(&self, now: Duration, limit: Duration) -> Duration {
        limit.saturating_sub(self.elapsed(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: Duration = Duration::from_secs(900);

    #[test]
    fn test_not_started_never_expires() {
        let clock = SessionClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(Duration::from_secs(5000)), Duration::ZERO);
        assert!(!clock.has_expired(Duration::from_secs(5000), LIMIT));
    }

    #[test]
    fn test_expires_exactly_at_limit() {
        let mut clock = SessionClock::new();
        clock.reset(Duration::from_secs(10));

        assert!(!clock.has_expired(Duration::from_secs(909), LIMIT));
        assert_eq!(
            clock.remaining(Duration::from_secs(909), LIMIT),
            Duration::from_secs(1)
        );
        assert!(clock.has_expired(Duration::from_secs(910), LIMIT));
        assert_eq!(clock.remaining(Duration::from_secs(2000), LIMIT), Duration::ZERO);
    }

    #[test]
    fn test_reset_restarts_measurement() {
        let mut clock = SessionClock::new();
        clock.reset(Duration::ZERO);
        assert!(clock.has_expired(Duration::from_secs(900), LIMIT));

        clock.reset(Duration::from_secs(900));
        assert!(!clock.has_expired(Duration::from_secs(901), LIMIT));
        assert_eq!(clock.elapsed(Duration::from_secs(901)), Duration::from_secs(1));
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(Duration::from_secs(1));
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_millis(1500));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
