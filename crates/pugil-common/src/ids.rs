//! ID types for fighters and match bookkeeping.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for fighter IDs.
static FIGHTER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a fighter in a bout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FighterId(u64);

impl FighterId {
    /// Creates a new unique fighter ID.
    #[must_use]
    pub fn new() -> Self {
        Self(FIGHTER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates a fighter ID from a raw value (for deserialization).
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Null/invalid fighter ID.
    pub const NULL: Self = Self(0);

    /// Checks if this is a valid (non-null) fighter ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for FighterId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which corner a fighter occupies in a bout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The fighter spawned toward the left stage edge.
    Left,
    /// The fighter spawned toward the right stage edge.
    Right,
}

impl Side {
    /// Returns the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase label for logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}
