//! Scripted fighter inputs for exhibition bouts.
//!
//! A [`BoutScript`] is a list of input holds keyed by frame number. The
//! bout loop samples it once per frame to produce the control state each
//! fighter sees, exactly as if a player were holding the key over that
//! stretch of frames.

use pugil_common::Side;
use pugil_sim::{ControlAction, ControlState};

/// One held control over a contiguous range of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHold {
    /// Fighter the hold applies to.
    pub side: Side,
    /// Control being held.
    pub action: ControlAction,
    /// First frame the control is down (inclusive).
    pub from: u64,
    /// Frame the control is released (exclusive).
    pub until: u64,
}

impl InputHold {
    /// Returns true when the hold covers `frame`.
    #[must_use]
    pub const fn covers(&self, frame: u64) -> bool {
        frame >= self.from && frame < self.until
    }
}

/// A frame-indexed input script for both fighters.
#[derive(Debug, Clone, Default)]
pub struct BoutScript {
    /// Scripted holds, in insertion order.
    holds: Vec<InputHold>,
}

impl BoutScript {
    /// Creates an empty script.
    #[must_use]
    pub const fn new() -> Self {
        Self { holds: Vec::new() }
    }

    /// Adds a control held by `side` from frame `from` (inclusive) until
    /// frame `until` (exclusive).
    #[must_use]
    pub fn hold(mut self, side: Side, action: ControlAction, from: u64, until: u64) -> Self {
        self.holds.push(InputHold {
            side,
            action,
            from,
            until,
        });
        self
    }

    /// Adds a control pressed for a single frame.
    #[must_use]
    pub fn press(self, side: Side, action: ControlAction, frame: u64) -> Self {
        self.hold(side, action, frame, frame + 1)
    }

    /// First frame past every scripted input.
    #[must_use]
    pub fn end_frame(&self) -> u64 {
        self.holds.iter().map(|hold| hold.until).max().unwrap_or(0)
    }

    /// Number of scripted holds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holds.len()
    }

    /// Returns true when nothing is scripted.
    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holds.is_empty()
    }

    /// Samples the controls both fighters see on `frame`.
    #[must_use]
    pub fn controls_at(&self, frame: u64) -> (ControlState, ControlState) {
        let mut left = ControlState::new();
        let mut right = ControlState::new();
        for hold in &self.holds {
            if !hold.covers(frame) {
                continue;
            }
            match hold.side {
                Side::Left => left.set_pressed(hold.action, true),
                Side::Right => right.set_pressed(hold.action, true),
            }
        }
        (left, right)
    }

    /// Canned exhibition bout.
    ///
    /// Both fighters close the gap while falling in from their corners and
    /// trade jabs on the way; once the dust settles on the floor, the left
    /// fighter throws a jumping attack and the right fighter backs off.
    #[must_use]
    pub fn exhibition() -> Self {
        Self::new()
            .hold(Side::Left, ControlAction::MoveRight, 0, 30)
            .hold(Side::Right, ControlAction::MoveLeft, 0, 30)
            .hold(Side::Left, ControlAction::Attack, 14, 20)
            .hold(Side::Right, ControlAction::Attack, 16, 22)
            .press(Side::Left, ControlAction::Jump, 80)
            .hold(Side::Left, ControlAction::Attack, 81, 87)
            .hold(Side::Right, ControlAction::MoveLeft, 88, 100)
    }
}
