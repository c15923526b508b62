//! Per-frame bout advancement.
//!
//! [`Simulation`] owns the stage and the event bus and nothing else. The
//! host owns both fighters and their control state and lends them to
//! [`Simulation::step`] once per frame, together with the timestamp the
//! frame runs at.

use std::time::Instant;
use tracing::debug;

use crate::collision;
use crate::controls::ControlState;
use crate::events::{EventBus, MatchEvent};
use crate::fighter::Fighter;
use crate::stage::Stage;

/// Advances a two-fighter bout one frame at a time.
#[derive(Debug)]
pub struct Simulation {
    /// Arena the bout runs on
    stage: Stage,
    /// Bus carrying this bout's signals
    events: EventBus,
}

impl Simulation {
    /// Creates a simulation over the given stage with a default event bus.
    #[must_use]
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            events: EventBus::default(),
        }
    }

    /// Creates a simulation with a custom event bus capacity.
    #[must_use]
    pub fn with_event_capacity(stage: Stage, capacity: usize) -> Self {
        Self {
            stage,
            events: EventBus::new(capacity),
        }
    }

    /// The stage this bout runs on.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The bus carrying this bout's events.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Advances both fighters one frame.
    ///
    /// `now` is the timestamp this frame runs at; attack windows expire
    /// against it, never against frame counts, so a window can open and
    /// close entirely between two calls. Frame order: expire attack
    /// windows, apply control state, integrate and clamp both bodies, test
    /// hits in both directions, swing hitboxes toward the opponent.
    pub fn step(
        &self,
        left: &mut Fighter,
        left_controls: &ControlState,
        right: &mut Fighter,
        right_controls: &ControlState,
        now: Instant,
    ) {
        self.expire_attacks(left, right, now);

        self.apply_controls(left, left_controls, now);
        self.apply_controls(right, right_controls, now);

        left.update(&self.stage);
        right.update(&self.stage);

        self.detect_hits(left, right);

        left.face_opponent(right);
        right.face_opponent(left);
    }

    /// Clears any window whose deadline has passed, for both fighters.
    fn expire_attacks(&self, left: &mut Fighter, right: &mut Fighter, now: Instant) {
        for fighter in [left, right] {
            if fighter.poll_attack_window(now) {
                self.events.publish(MatchEvent::AttackEnded {
                    fighter: fighter.id(),
                });
            }
        }
    }

    /// Turns held flags into this frame's velocity and attack state.
    fn apply_controls(&self, fighter: &mut Fighter, controls: &ControlState, now: Instant) {
        fighter.apply_movement(controls.move_left, controls.move_right);

        if controls.jump {
            fighter.try_jump(&self.stage);
        }

        if controls.attack && fighter.attack_at(now) {
            self.events.publish(MatchEvent::AttackStarted {
                fighter: fighter.id(),
            });
        }
    }

    /// Emits a hit for each direction where a live hitbox touches a body.
    fn detect_hits(&self, left: &Fighter, right: &Fighter) {
        for (attacker, defender) in [(&*left, &*right), (&*right, &*left)] {
            if collision::hit_connects(attacker, defender) {
                debug!(
                    "hit landed: {} -> {}",
                    attacker.id().raw(),
                    defender.id().raw()
                );
                self.events.publish(MatchEvent::Hit {
                    attacker: attacker.id(),
                    defender: defender.id(),
                });
            }
        }
    }
}
