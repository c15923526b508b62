//! Fighter state and per-frame physics.
//!
//! A fighter is a body box plus an owned attack hitbox. The body obeys the
//! stage bounds; the hitbox is re-derived from the body every frame and
//! swings to whichever side the opponent is on.

use pugil_common::FighterId;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::attack::AttackWindow;
use crate::geometry::{Rect, Vec2};
use crate::stage::Stage;

/// Fighter tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterConfig {
    /// Body box width
    pub width: f32,
    /// Body box height
    pub height: f32,
    /// Attack hitbox width
    pub hitbox_width: f32,
    /// Attack hitbox height
    pub hitbox_height: f32,
    /// Horizontal speed while a direction is held, units per frame
    pub walk_speed: f32,
    /// Vertical velocity set on jump (negative = upward)
    pub jump_impulse: f32,
    /// Attack window duration in milliseconds
    pub attack_window_ms: u64,
    /// Hitbox x offset while facing right; negative pushes the box past the
    /// fighter's own right edge
    pub facing_right_offset: f32,
    /// Hitbox x offset while facing left
    pub facing_left_offset: f32,
}

impl Default for FighterConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 150.0,
            hitbox_width: 100.0,
            hitbox_height: 50.0,
            walk_speed: 2.0,
            jump_impulse: -10.0,
            attack_window_ms: 100,
            facing_right_offset: -50.0,
            facing_left_offset: 100.0,
        }
    }
}

impl FighterConfig {
    /// Attack window duration as a `Duration`.
    #[must_use]
    pub const fn attack_window(&self) -> Duration {
        Duration::from_millis(self.attack_window_ms)
    }
}

/// Attack hitbox owned by a fighter.
///
/// `position` is derived from the owner every frame as `owner position -
/// offset`; it is never steered independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Top-left corner, world space (derived)
    pub position: Vec2,
    /// Subtracted from the owner's position when deriving `position`
    pub offset: Vec2,
    /// Box width
    pub width: f32,
    /// Box height
    pub height: f32,
}

impl Hitbox {
    /// Creates a hitbox with the given offset and extent.
    #[must_use]
    pub const fn new(offset: Vec2, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            offset,
            width,
            height,
        }
    }

    /// World-space rectangle of the hitbox.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::at(self.position, self.width, self.height)
    }
}

/// One fighter in a bout.
#[derive(Debug, Clone)]
pub struct Fighter {
    /// Unique fighter ID
    id: FighterId,
    /// Top-left corner of the body box, world space
    position: Vec2,
    /// Displacement applied on the next frame, world units per frame
    velocity: Vec2,
    /// Owned attack hitbox
    hitbox: Hitbox,
    /// Open attack window, if any
    attack: Option<AttackWindow>,
    /// Tuning parameters
    config: FighterConfig,
}

impl Fighter {
    /// Creates a fighter at the given position with default tuning.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self::with_config(position, FighterConfig::default())
    }

    /// Creates a fighter at the given position with custom tuning.
    #[must_use]
    pub fn with_config(position: Vec2, config: FighterConfig) -> Self {
        Self {
            id: FighterId::new(),
            position,
            velocity: Vec2::ZERO,
            hitbox: Hitbox::new(Vec2::ZERO, config.hitbox_width, config.hitbox_height),
            attack: None,
            config,
        }
    }

    /// Sets the initial hitbox offset (builder style).
    #[must_use]
    pub fn with_hitbox_offset(mut self, offset: Vec2) -> Self {
        self.hitbox.offset = offset;
        self
    }

    /// The fighter's unique ID.
    #[must_use]
    pub fn id(&self) -> FighterId {
        self.id
    }

    /// Current position (top-left of the body box).
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Sets the position directly.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Current velocity, world units per frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Sets the velocity directly.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// The owned attack hitbox.
    #[must_use]
    pub fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }

    /// Tuning parameters.
    #[must_use]
    pub fn config(&self) -> &FighterConfig {
        &self.config
    }

    /// Body box width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.config.width
    }

    /// Body box height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.config.height
    }

    /// World-space rectangle of the body.
    #[must_use]
    pub fn body_box(&self) -> Rect {
        Rect::at(self.position, self.config.width, self.config.height)
    }

    /// World-space rectangle of the attack hitbox.
    #[must_use]
    pub fn hitbox_rect(&self) -> Rect {
        self.hitbox.rect()
    }

    /// True while an attack window is open.
    #[must_use]
    pub fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    /// The open attack window, if any.
    #[must_use]
    pub fn attack_window(&self) -> Option<AttackWindow> {
        self.attack
    }

    /// True when the feet are at or below the floor line.
    #[must_use]
    pub fn is_grounded(&self, stage: &Stage) -> bool {
        self.position.y + self.config.height >= stage.floor()
    }

    /// Sets horizontal velocity from held direction flags.
    ///
    /// Velocity is rederived from scratch every frame: nothing held (or both
    /// directions held) leaves it at zero.
    pub fn apply_movement(&mut self, move_left: bool, move_right: bool) {
        self.velocity.x = 0.0;
        if move_left && !move_right {
            self.velocity.x = -self.config.walk_speed;
        }
        if move_right && !move_left {
            self.velocity.x = self.config.walk_speed;
        }
    }

    /// Applies the jump impulse if the feet are at or below the floor line.
    ///
    /// The impulse replaces vertical velocity outright; airborne calls do
    /// nothing. Returns whether the jump happened.
    pub fn try_jump(&mut self, stage: &Stage) -> bool {
        if self.is_grounded(stage) {
            self.velocity.y = self.config.jump_impulse;
            true
        } else {
            false
        }
    }

    /// Opens (or restarts) the attack window at `now`.
    ///
    /// Restarting replaces the deadline with a fresh one; there is no
    /// cooldown. Returns true when the window was newly opened rather than
    /// restarted.
    pub fn attack_at(&mut self, now: Instant) -> bool {
        let was_attacking = self.attack.is_some();
        self.attack = Some(AttackWindow::open(now, self.config.attack_window()));
        !was_attacking
    }

    /// Opens (or restarts) the attack window at the current wall-clock time.
    pub fn attack(&mut self) -> bool {
        self.attack_at(Instant::now())
    }

    /// Clears the attack window once its deadline has passed.
    ///
    /// Runs every step whether or not the fighter is doing anything else, so
    /// a pending window always closes on time. Returns true when the window
    /// was cleared by this call.
    pub fn poll_attack_window(&mut self, now: Instant) -> bool {
        if self.attack.is_some_and(|window| window.is_expired(now)) {
            self.attack = None;
            true
        } else {
            false
        }
    }

    /// Advances one frame of physics against the stage bounds.
    ///
    /// The hitbox is re-anchored before integration, so while moving it
    /// trails the body by one frame. The wall and floor checks test the
    /// already-integrated position plus the current velocity a second time
    /// (a one-frame lookahead), and the floor check zeroes vertical velocity
    /// without snapping the body onto the floor line.
    pub fn update(&mut self, stage: &Stage) {
        self.hitbox.position = self.position - self.hitbox.offset;

        self.position += self.velocity;

        if self.position.x + self.velocity.x >= stage.right_edge(self.config.width) {
            self.velocity.x = 0.0;
            self.position.x = stage.right_edge(self.config.width);
        }
        if self.position.x + self.velocity.x <= 0.0 {
            self.velocity.x = 0.0;
            self.position.x = 0.0;
        }

        if self.position.y + self.config.height + self.velocity.y >= stage.floor() {
            self.velocity.y = 0.0;
        } else {
            self.velocity.y += stage.gravity();
        }
    }

    /// Swings the hitbox toward an opponent.
    ///
    /// While the hitbox's left edge is at or left of the opponent's right
    /// edge, the fighter counts as facing right; otherwise it faces left.
    /// Only the offset changes here; the hitbox position catches up on the
    /// next update.
    pub fn face_opponent(&mut self, opponent: &Fighter) {
        if self.hitbox.position.x <= opponent.position.x + opponent.config.width {
            self.hitbox.offset.x = self.config.facing_right_offset;
        } else {
            self.hitbox.offset.x = self.config.facing_left_offset;
        }
    }
}
