//! Bout lifecycle management.
//!
//! Loads the match configuration, puts the stage and fighters together,
//! and drives a scripted bout at a fixed frame rate.

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{debug, info};

use pugil_common::{FighterId, Side};
use pugil_sim::{Fighter, MatchConfig, MatchEvent, Simulation, Stage};

use crate::script::BoutScript;
use crate::timing::FrameClock;

/// Frame rate the bout loop paces itself to.
const TARGET_FPS: u32 = 60;

/// Hard ceiling on bout length, in case a configuration keeps the
/// fighters from ever settling.
const MAX_FRAMES: u64 = 10_000;

/// A running bout: stage, fighters, script, and hit tallies.
pub struct Bout {
    /// Simulation stepper and event bus
    sim: Simulation,
    /// Left-corner fighter
    left: Fighter,
    /// Right-corner fighter
    right: Fighter,
    /// Scripted inputs for both corners
    script: BoutScript,
    /// Frames stepped so far
    frame: u64,
    /// Hits landed by the left fighter
    left_hits: u32,
    /// Hits landed by the right fighter
    right_hits: u32,
}

impl Bout {
    /// Builds a bout from a validated configuration and an input script.
    pub fn new(config: &MatchConfig, script: BoutScript) -> Result<Self> {
        let stage = config
            .stage()
            .context("building stage from configuration")?;
        let sim = Simulation::new(stage);
        let left = config.spawn(Side::Left);
        let right = config.spawn(Side::Right);

        Ok(Self {
            sim,
            left,
            right,
            script,
            frame: 0,
            left_hits: 0,
            right_hits: 0,
        })
    }

    /// Steps the bout one frame: samples the script, advances the
    /// simulation, and reports whatever events came out.
    pub fn advance(&mut self, now: Instant) {
        let (left_controls, right_controls) = self.script.controls_at(self.frame);
        self.sim.step(
            &mut self.left,
            &left_controls,
            &mut self.right,
            &right_controls,
            now,
        );
        self.drain_events();
        self.frame += 1;
    }

    /// Drains the event bus, logging each event and tallying hits.
    fn drain_events(&mut self) {
        for event in self.sim.events().drain() {
            match event {
                MatchEvent::AttackStarted { fighter } => {
                    debug!(
                        "{} corner opens an attack window on frame {}",
                        self.corner_label(fighter),
                        self.frame
                    );
                },
                MatchEvent::AttackEnded { fighter } => {
                    debug!(
                        "{} corner's attack window closed on frame {}",
                        self.corner_label(fighter),
                        self.frame
                    );
                },
                MatchEvent::Hit { attacker, defender } => {
                    if attacker == self.left.id() {
                        self.left_hits += 1;
                    } else {
                        self.right_hits += 1;
                    }
                    info!(
                        "{} corner hits the {} corner on frame {}",
                        self.corner_label(attacker),
                        self.corner_label(defender),
                        self.frame
                    );
                },
            }
        }
    }

    /// Maps a fighter id back to its corner label for logging.
    fn corner_label(&self, fighter: FighterId) -> &'static str {
        if fighter == self.left.id() {
            Side::Left.label()
        } else {
            Side::Right.label()
        }
    }

    /// Returns true once the script is exhausted and both fighters are
    /// idle on the floor with no attack window still open.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        if self.frame >= MAX_FRAMES {
            return true;
        }
        self.frame >= self.script.end_frame()
            && !self.left.is_attacking()
            && !self.right.is_attacking()
            && self.left.is_grounded(self.stage())
            && self.right.is_grounded(self.stage())
    }

    /// Frames stepped so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Hits landed so far, as `(left, right)`.
    #[must_use]
    pub fn hit_tally(&self) -> (u32, u32) {
        (self.left_hits, self.right_hits)
    }

    /// The left-corner fighter.
    #[must_use]
    pub fn left(&self) -> &Fighter {
        &self.left
    }

    /// The right-corner fighter.
    #[must_use]
    pub fn right(&self) -> &Fighter {
        &self.right
    }

    /// The stage the bout is fought on.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        self.sim.stage()
    }
}

/// Runs a full exhibition bout.
pub fn run() -> Result<()> {
    let config = MatchConfig::load();
    config
        .validate()
        .context("match configuration failed validation")?;

    info!("Configuration loaded:");
    info!("  Stage: {}x{}", config.stage.width, config.stage.height);
    info!("  Gravity: {} per frame", config.stage.gravity);
    info!(
        "  Fighters: {}x{}, walk speed {}",
        config.fighters.width, config.fighters.height, config.fighters.walk_speed
    );

    let script = BoutScript::exhibition();
    let mut clock = FrameClock::new(TARGET_FPS);
    info!(
        "Bout starting - {} scripted holds over {} frames @ {} FPS",
        script.len(),
        script.end_frame(),
        clock.target_fps()
    );
    let mut bout = Bout::new(&config, script)?;

    let mut elapsed = 0.0_f32;
    while !bout.is_finished() {
        elapsed += clock.delta_time();
        bout.advance(Instant::now());
        clock.sleep_remainder();
    }

    let (left_hits, right_hits) = bout.hit_tally();
    info!(
        "Bout complete after {} frames ({:.1}s wall clock)",
        bout.frames(),
        elapsed
    );
    info!("  Left corner:  {left_hits} hits landed");
    info!("  Right corner: {right_hits} hits landed");
    info!(
        "  Final positions: left ({:.0}, {:.0}), right ({:.0}, {:.0})",
        bout.left().position().x,
        bout.left().position().y,
        bout.right().position().x,
        bout.right().position().y
    );
    info!(
        "  Average frame time: {:.2} ms ({:.1} FPS)",
        clock.average_frame_time_ms(),
        clock.current_fps()
    );

    Ok(())
}
