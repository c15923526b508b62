//! # Pugil Sim
//!
//! Minimal 2D side-view fighting simulation: two fighters on a bounded
//! stage with gravity, walk and jump movement, wall-clock attack windows,
//! and inclusive box-overlap hit detection.
//!
//! The crate renders nothing and reads no input devices. A host drives it
//! frame by frame:
//! - translate its input source into [`controls::ControlState`] flags,
//! - call [`step::Simulation::step`] once per frame with a timestamp,
//! - drain [`events::EventBus`] for attack and hit signals,
//! - read fighter positions and boxes for whatever presentation it wants.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod attack;
pub mod collision;
pub mod config;
pub mod controls;
pub mod events;
pub mod fighter;
pub mod geometry;
pub mod stage;
pub mod step;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::attack::*;
    pub use crate::collision::*;
    pub use crate::config::*;
    pub use crate::controls::*;
    pub use crate::events::*;
    pub use crate::fighter::*;
    pub use crate::geometry::*;
    pub use crate::stage::*;
    pub use crate::step::*;
}

pub use prelude::*;
