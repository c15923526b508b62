//! Stage geometry and gravity.
//!
//! The stage is a bounded box: solid walls at x = 0 and x = width, a solid
//! floor at y = height, and an open top. Gravity is a per-frame velocity
//! increment, not a per-second acceleration.

use pugil_common::{PugilError, PugilResult};

/// Default stage width in world units.
pub const DEFAULT_WIDTH: f32 = 1024.0;

/// Default stage height in world units.
pub const DEFAULT_HEIGHT: f32 = 576.0;

/// Default downward velocity increment applied each airborne frame.
pub const DEFAULT_GRAVITY: f32 = 0.2;

/// Immutable arena a bout runs on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    width: f32,
    height: f32,
    gravity: f32,
}

impl Stage {
    /// Creates a stage, rejecting unusable geometry.
    ///
    /// Width and height must be finite and positive; gravity must be finite
    /// and non-negative.
    pub fn new(width: f32, height: f32, gravity: f32) -> PugilResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(PugilError::invalid_stage("width must be finite and positive"));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(PugilError::invalid_stage(
                "height must be finite and positive",
            ));
        }
        if !gravity.is_finite() || gravity < 0.0 {
            return Err(PugilError::invalid_stage(
                "gravity must be finite and non-negative",
            ));
        }

        Ok(Self {
            width,
            height,
            gravity,
        })
    }

    /// Stage width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Stage height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Per-frame gravity increment.
    #[must_use]
    pub const fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Y coordinate of the floor line (the bottom edge).
    #[must_use]
    pub const fn floor(&self) -> f32 {
        self.height
    }

    /// Largest in-bounds x position for a body of the given width.
    #[must_use]
    pub fn right_edge(&self, body_width: f32) -> f32 {
        self.width - body_width
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gravity: DEFAULT_GRAVITY,
        }
    }
}
