//! Box intersection tests for landing hits.

use crate::fighter::Fighter;
use crate::geometry::Rect;

/// Tests whether two boxes overlap, counting touching edges as contact.
///
/// All four comparisons are inclusive: a hitbox whose right edge lines up
/// exactly with a body's left edge still connects. The test is symmetric
/// and makes no distinction between hitbox and body.
#[must_use]
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.right() >= b.left() && a.left() <= b.right() && a.bottom() >= b.top() && a.top() <= b.bottom()
}

/// Tests whether an attacker's live hitbox connects with a defender's body.
///
/// False whenever the attacker has no open attack window, no matter how the
/// boxes line up.
#[must_use]
pub fn hit_connects(attacker: &Fighter, defender: &Fighter) -> bool {
    attacker.is_attacking() && intersects(attacker.hitbox_rect(), defender.body_box())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;
    use crate::stage::Stage;
    use std::time::Instant;

    #[test]
    fn test_disjoint_boxes_do_not_intersect() {
        // Hitbox spanning x 450..550 against a body at 600..650.
        let hitbox = Rect::new(450.0, 100.0, 100.0, 50.0);
        let body = Rect::new(600.0, 0.0, 50.0, 150.0);
        assert!(!intersects(hitbox, body));
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        // Same hitbox against a body at 500..550.
        let hitbox = Rect::new(450.0, 100.0, 100.0, 50.0);
        let body = Rect::new(500.0, 0.0, 50.0, 150.0);
        assert!(intersects(hitbox, body));
    }

    #[test]
    fn test_touching_edges_count() {
        // Hitbox right edge exactly on the body's left edge.
        let hitbox = Rect::new(450.0, 100.0, 100.0, 50.0);
        let body = Rect::new(550.0, 0.0, 50.0, 150.0);
        assert!(intersects(hitbox, body));

        // And corner-to-corner contact.
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(intersects(a, b));
    }

    #[test]
    fn test_vertical_separation_blocks_contact() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(0.0, 100.0, 50.0, 50.0);
        assert!(!intersects(a, b));
    }

    #[test]
    fn test_containment_is_contact() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(intersects(outer, inner));
        assert!(intersects(inner, outer));
    }

    #[test]
    fn test_hits_require_an_open_window() {
        let stage = Stage::default();
        let mut attacker = Fighter::new(Vec2::new(412.0, 426.0));
        let mut defender = Fighter::new(Vec2::new(450.0, 426.0));
        attacker.update(&stage);
        defender.update(&stage);

        // Boxes overlap but the window is closed.
        assert!(intersects(attacker.hitbox_rect(), defender.body_box()));
        assert!(!hit_connects(&attacker, &defender));

        attacker.attack_at(Instant::now());
        assert!(hit_connects(&attacker, &defender));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_intersection_is_symmetric(
                ax in -500.0f32..500.0,
                ay in -500.0f32..500.0,
                aw in 1.0f32..300.0,
                ah in 1.0f32..300.0,
                bx in -500.0f32..500.0,
                by in -500.0f32..500.0,
                bw in 1.0f32..300.0,
                bh in 1.0f32..300.0,
            ) {
                let a = Rect::new(ax, ay, aw, ah);
                let b = Rect::new(bx, by, bw, bh);
                prop_assert_eq!(intersects(a, b), intersects(b, a));
            }

            #[test]
            fn test_every_box_touches_itself(
                x in -500.0f32..500.0,
                y in -500.0f32..500.0,
                w in 1.0f32..300.0,
                h in 1.0f32..300.0,
            ) {
                let rect = Rect::new(x, y, w, h);
                prop_assert!(intersects(rect, rect));
            }
        }
    }
}
