//! End-to-end tests for the bout driver.
//!
//! Each test runs a scripted bout frame by frame on a synthetic 60 FPS
//! clock, then checks fighter state and hit tallies against hand-computed
//! expectations.

#![cfg(test)]

use std::time::{Duration, Instant};

use pugil_common::Side;
use pugil_sim::{ControlAction, MatchConfig};

use crate::app::Bout;
use crate::script::BoutScript;

/// Builds a bout of the default match configuration.
fn bout_with(script: BoutScript) -> Bout {
    let config = MatchConfig::default();
    Bout::new(&config, script).expect("default configuration must build a bout")
}

/// Advances `bout` through frames `0..frames`, timestamping frame `n`
/// at `start + n * 16ms`.
fn run_frames(bout: &mut Bout, start: Instant, frames: u64) {
    for frame in 0..frames {
        bout.advance(start + Duration::from_millis(frame * 16));
    }
}

/// Test suite for spawning and gravity integration
mod gravity_tests {
    use super::*;

    #[test]
    fn e2e_fighters_fall_from_their_corners() {
        let mut bout = bout_with(BoutScript::new());
        run_frames(&mut bout, Instant::now(), 2);

        // First frame only accrues velocity; the second one moves.
        assert_eq!(
            bout.left().position().y,
            0.2,
            "left fighter should have fallen one gravity step after two frames"
        );
        assert_eq!(bout.right().position().y, 0.2);
        assert_eq!(bout.left().velocity().y, 0.4);
        assert_eq!(bout.right().velocity().y, 0.4);
    }

    #[test]
    fn e2e_empty_script_bout_settles_on_the_floor() {
        let mut bout = bout_with(BoutScript::new());
        let start = Instant::now();
        let mut frame = 0_u64;
        while !bout.is_finished() && frame < 1_000 {
            bout.advance(start + Duration::from_millis(frame * 16));
            frame += 1;
        }

        assert!(bout.is_finished(), "fighters should come to rest on the floor");
        assert!(
            (60..200).contains(&bout.frames()),
            "fall from the top of the stage should settle in well under 200 frames, took {}",
            bout.frames()
        );
        assert!(bout.left().is_grounded(bout.stage()));
        assert!(bout.right().is_grounded(bout.stage()));
        assert_eq!(bout.hit_tally(), (0, 0), "nobody swung, nobody got hit");
    }

    #[test]
    fn e2e_jump_input_while_airborne_never_fires() {
        // Fighters spawn at the top of the stage, so the first seconds of
        // any bout are spent falling; jump input during the fall is ignored.
        let script = BoutScript::new().hold(Side::Left, ControlAction::Jump, 0, 40);
        let mut bout = bout_with(script);
        run_frames(&mut bout, Instant::now(), 60);

        assert!(
            bout.left().velocity().y > 0.0,
            "holding jump during the opening fall should never produce an upward impulse"
        );
        assert!(!bout.left().is_grounded(bout.stage()));
    }

    #[test]
    fn e2e_held_jump_fires_once_after_landing() {
        // The fall from y=0 settles in the 80..100 frame range, so a jump
        // held across 80..120 fires on the first grounded frame inside it.
        let script = BoutScript::new().hold(Side::Left, ControlAction::Jump, 80, 120);
        let mut bout = bout_with(script);
        run_frames(&mut bout, Instant::now(), 120);

        assert!(
            bout.left().velocity().y < 0.0,
            "left fighter should still be rising from the jump at frame 120"
        );
        assert!(!bout.left().is_grounded(bout.stage()));
        assert!(
            bout.right().is_grounded(bout.stage()),
            "right fighter never jumped and should stay put on the floor"
        );
        assert_eq!(bout.hit_tally(), (0, 0));
    }
}

/// Test suite for attacks, windows, and hit tallies
mod combat_tests {
    use super::*;

    #[test]
    fn e2e_closing_attack_lands_a_hit_streak() {
        // Both fighters close at 2 units per frame, so the left hitbox
        // reaches the right body on frame 12. The attack held over frames
        // 14..20 restarts its window on every held frame; the last restart
        // at frame 19 (t=304ms) keeps it open through frame 25 (t=400ms).
        // That makes frames 14..=25 hit frames: twelve in all.
        let script = BoutScript::new()
            .hold(Side::Left, ControlAction::MoveRight, 0, 30)
            .hold(Side::Right, ControlAction::MoveLeft, 0, 30)
            .hold(Side::Left, ControlAction::Attack, 14, 20);
        let mut bout = bout_with(script);
        run_frames(&mut bout, Instant::now(), 40);

        let (left_hits, right_hits) = bout.hit_tally();
        assert_eq!(left_hits, 12, "expected a hit on every frame the window was open");
        assert_eq!(right_hits, 0, "right fighter never attacked");
        assert!(!bout.left().is_attacking(), "window should be long closed by frame 40");
    }

    #[test]
    fn e2e_attack_window_expires_while_idle() {
        // A single tap opens the window at t=0; it expires at t=100ms,
        // which the 16ms clock first observes on frame 7 (t=112ms).
        let script = BoutScript::new().press(Side::Left, ControlAction::Attack, 0);
        let mut bout = bout_with(script);
        let start = Instant::now();
        run_frames(&mut bout, start, 7);
        assert!(
            bout.left().is_attacking(),
            "window opened at t=0 should still be open at t=96ms"
        );

        bout.advance(start + Duration::from_millis(7 * 16));
        assert!(
            !bout.left().is_attacking(),
            "window opened at t=0 should be closed at t=112ms"
        );
        assert_eq!(
            bout.hit_tally(),
            (0, 0),
            "fighters spawn out of reach, so an idle attack hits nothing"
        );
    }

    #[test]
    fn e2e_mutual_attacks_tally_both_corners() {
        // Symmetric jabs while closing: each window restarts last on frame
        // 15 (t=240ms) and stays open through frame 21 (t=336ms), giving
        // both corners candidate hit frames 14..=21. The tallies are not
        // symmetric: once the corners cross on frame 12 the right fighter's
        // facing flips every other frame, so its hitbox swings behind it on
        // odd frames and only connects on the even ones.
        let script = BoutScript::new()
            .hold(Side::Left, ControlAction::MoveRight, 0, 30)
            .hold(Side::Right, ControlAction::MoveLeft, 0, 30)
            .hold(Side::Left, ControlAction::Attack, 14, 16)
            .hold(Side::Right, ControlAction::Attack, 14, 16);
        let mut bout = bout_with(script);
        run_frames(&mut bout, Instant::now(), 40);

        let (left_hits, right_hits) = bout.hit_tally();
        assert_eq!(left_hits, 8, "left connects on every open frame 14..=21");
        assert_eq!(right_hits, 4, "right connects only on frames 14, 16, 18, 20");
    }
}

/// Test suite for movement and stage boundaries
mod boundary_tests {
    use super::*;

    #[test]
    fn e2e_walk_script_moves_only_the_scripted_fighter() {
        let script = BoutScript::new().hold(Side::Left, ControlAction::MoveRight, 0, 10);
        let mut bout = bout_with(script);
        run_frames(&mut bout, Instant::now(), 10);

        assert_eq!(
            bout.left().position().x,
            432.0,
            "ten frames at walk speed 2 should cover 20 units"
        );
        assert_eq!(bout.right().position().x, 612.0, "right fighter had no script");
    }

    #[test]
    fn e2e_right_wall_pins_the_right_fighter() {
        let script = BoutScript::new().hold(Side::Right, ControlAction::MoveRight, 0, 250);
        let mut bout = bout_with(script);
        let start = Instant::now();
        for frame in 0..250 {
            bout.advance(start + Duration::from_millis(frame * 16));
            assert!(
                bout.right().position().x <= 974.0,
                "right fighter crossed the wall on frame {frame}"
            );
        }
        assert_eq!(
            bout.right().position().x,
            974.0,
            "a long walk right should end pinned at stage width minus fighter width"
        );
    }

    #[test]
    fn e2e_left_wall_pins_the_left_fighter() {
        let script = BoutScript::new().hold(Side::Left, ControlAction::MoveLeft, 0, 250);
        let mut bout = bout_with(script);
        let start = Instant::now();
        for frame in 0..250 {
            bout.advance(start + Duration::from_millis(frame * 16));
            assert!(
                bout.left().position().x >= 0.0,
                "left fighter crossed the wall on frame {frame}"
            );
        }
        assert_eq!(bout.left().position().x, 0.0);
    }
}
