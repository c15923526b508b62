//! Attack window timing.
//!
//! An attack is a wall-clock window during which the fighter's hitbox can
//! connect. The window opens the instant the attack is invoked and closes a
//! fixed duration later, regardless of how many frames run in between; a
//! slow frame rate can see a whole window open and close between two steps.

use std::time::{Duration, Instant};

/// Default attack window duration.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

/// One open attack window.
///
/// Re-opening while a window is live replaces it wholesale, which restarts
/// the deadline. There is no cooldown and no queueing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackWindow {
    opened_at: Instant,
    expires_at: Instant,
}

impl AttackWindow {
    /// Opens a window at `now` lasting `duration`.
    #[must_use]
    pub fn open(now: Instant, duration: Duration) -> Self {
        Self {
            opened_at: now,
            expires_at: now + duration,
        }
    }

    /// Instant the window opened.
    #[must_use]
    pub fn opened_at(&self) -> Instant {
        self.opened_at
    }

    /// Instant the window closes.
    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// True once `now` has reached the deadline (inclusive).
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Time left before the window closes; zero once expired.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
