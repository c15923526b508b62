//! Per-fighter control state.
//!
//! The simulation never reads input devices. A host translates whatever it
//! listens to (keyboard events, a replay file, a network feed) into held
//! flags on a [`ControlState`], one instance per fighter, and the simulation
//! samples those flags once per step. [`SharedControlState`] is the same
//! surface for hosts that sample input on another thread.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Logical actions a fighter can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlAction {
    /// Walk toward the left stage edge
    MoveLeft,
    /// Walk toward the right stage edge
    MoveRight,
    /// Jump when grounded
    Jump,
    /// Open (or restart) the attack window
    Attack,
}

/// Held-flag state for one fighter.
///
/// Flags are level-triggered: they stay set for as long as the host keeps
/// them pressed, and each simulation step reads them exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlState {
    /// Whether left movement is held
    pub move_left: bool,
    /// Whether right movement is held
    pub move_right: bool,
    /// Whether jump is held
    pub jump: bool,
    /// Whether attack is held
    pub attack: bool,
}

impl ControlState {
    /// Creates a control state with nothing held.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            move_left: false,
            move_right: false,
            jump: false,
            attack: false,
        }
    }

    /// Sets one action's held flag.
    pub fn set_pressed(&mut self, action: ControlAction, pressed: bool) {
        match action {
            ControlAction::MoveLeft => self.move_left = pressed,
            ControlAction::MoveRight => self.move_right = pressed,
            ControlAction::Jump => self.jump = pressed,
            ControlAction::Attack => self.attack = pressed,
        }
    }

    /// Reads one action's held flag.
    #[must_use]
    pub const fn is_pressed(&self, action: ControlAction) -> bool {
        match action {
            ControlAction::MoveLeft => self.move_left,
            ControlAction::MoveRight => self.move_right,
            ControlAction::Jump => self.jump,
            ControlAction::Attack => self.attack,
        }
    }

    /// Releases every action.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// True when any action is held.
    #[must_use]
    pub const fn any_pressed(&self) -> bool {
        self.move_left || self.move_right || self.jump || self.attack
    }
}

/// Control flags shared with an input thread.
///
/// The writer thread flips flags as device events arrive; the simulation
/// thread takes a [`snapshot`](Self::snapshot) before each step. The flags
/// are the only data crossing threads, so no further synchronization is
/// involved.
#[derive(Debug, Default)]
pub struct SharedControlState {
    move_left: AtomicBool,
    move_right: AtomicBool,
    jump: AtomicBool,
    attack: AtomicBool,
}

impl SharedControlState {
    /// Creates a shared control state with nothing held.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            move_left: AtomicBool::new(false),
            move_right: AtomicBool::new(false),
            jump: AtomicBool::new(false),
            attack: AtomicBool::new(false),
        }
    }

    /// Sets one action's held flag.
    pub fn set_pressed(&self, action: ControlAction, pressed: bool) {
        let flag = match action {
            ControlAction::MoveLeft => &self.move_left,
            ControlAction::MoveRight => &self.move_right,
            ControlAction::Jump => &self.jump,
            ControlAction::Attack => &self.attack,
        };
        flag.store(pressed, Ordering::Relaxed);
    }

    /// Reads one action's held flag.
    #[must_use]
    pub fn is_pressed(&self, action: ControlAction) -> bool {
        let flag = match action {
            ControlAction::MoveLeft => &self.move_left,
            ControlAction::MoveRight => &self.move_right,
            ControlAction::Jump => &self.jump,
            ControlAction::Attack => &self.attack,
        };
        flag.load(Ordering::Relaxed)
    }

    /// Copies the current flags into a plain [`ControlState`].
    #[must_use]
    pub fn snapshot(&self) -> ControlState {
        ControlState {
            move_left: self.move_left.load(Ordering::Relaxed),
            move_right: self.move_right.load(Ordering::Relaxed),
            jump: self.jump.load(Ordering::Relaxed),
            attack: self.attack.load(Ordering::Relaxed),
        }
    }

    /// Releases every action.
    pub fn clear(&self) {
        self.move_left.store(false, Ordering::Relaxed);
        self.move_right.store(false, Ordering::Relaxed);
        self.jump.store(false, Ordering::Relaxed);
        self.attack.store(false, Ordering::Relaxed);
    }
}
