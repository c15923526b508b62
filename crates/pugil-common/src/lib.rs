//! # Pugil Common
//!
//! Common types, utilities, and shared abstractions for Pugil.
//!
//! This crate provides foundational types used across all Pugil subsystems:
//! - ID types (FighterId, Side)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fighter_id_generation() {
        let id1 = FighterId::new();
        let id2 = FighterId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_side_round_trip() {
        assert_eq!(Side::Left.opponent().opponent(), Side::Left);
    }

    #[test]
    fn test_error_result_alias() {
        fn check(width: f32) -> PugilResult<f32> {
            if width > 0.0 {
                Ok(width)
            } else {
                Err(PugilError::invalid_stage("width must be positive"))
            }
        }

        assert!(check(1024.0).is_ok());
        assert!(check(0.0).is_err());
    }
}
