use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::fish::Motif;
use crate::sim::pointer::PointerState;
use crate::sizing::Dimensions;

/// Per-axis distance to the bait at which a fish stops chasing and starts eating.
pub const EAT_DISTANCE: f32 = 60.0;
/// Fraction of cruise speed while eating.
const EATING_SPEED: f32 = 0.3;

/// Advance one fish by a tick. `pointer` is `None` when interaction is off.
pub fn update(
    motif: &mut Motif,
    dims: Dimensions,
    pointer: Option<&PointerState>,
    rng: &mut fastrand::Rng,
) {
    if motif.has_exited(dims) {
        *motif = Motif::spawn(rng, dims);
        return;
    }

    match pointer.filter(|p| p.hovering) {
        Some(p) => steer(motif, p.position(), rng),
        None => cruise(motif),
    }
}

/// Straight horizontal swim, keeping whichever side the fish was facing.
fn cruise(motif: &mut Motif) {
    motif.eating = false;
    if motif.facing_left() {
        motif.heading = PI;
        motif.pos.x -= motif.speed;
    } else {
        motif.heading = 0.0;
        motif.pos.x += motif.speed;
    }
}

/// Chase the bait; once close on both axes, hold one random heading until
/// the bait gets away on either axis.
fn steer(motif: &mut Motif, bait: Vec2, rng: &mut fastrand::Rng) {
    let delta = bait - motif.pos;

    if delta.x.abs() > EAT_DISTANCE || delta.y.abs() > EAT_DISTANCE {
        motif.eating = false;
        motif.heading = delta.y.atan2(delta.x);
        motif.pos += Vec2::from_angle(motif.heading) * motif.speed;
        return;
    }

    if !motif.eating {
        motif.eating = true;
        motif.heading = rng.f32() * TAU;
    }
    motif.pos += Vec2::from_angle(motif.heading) * motif.speed * EATING_SPEED;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fish::{MAX_MOTIF_SIZE, MIN_MOTIF_SIZE, MIN_MOTIF_VELOCITY, MAX_MOTIF_VELOCITY};

    const DIMS: Dimensions = Dimensions {
        width: 800.0,
        height: 600.0,
    };

    fn fish(x: f32, y: f32, heading: f32) -> Motif {
        Motif {
            pos: Vec2::new(x, y),
            size: 40.0,
            speed: 5.0,
            transparency: 128,
            heading,
            eating: false,
        }
    }

    fn hovering(x: f32, y: f32) -> PointerState {
        PointerState {
            hovering: true,
            x,
            y,
        }
    }

    #[test]
    fn cruises_by_exactly_its_speed() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut left = fish(400.0, 100.0, PI);
        let mut right = fish(400.0, 100.0, 0.0);
        for tick in 1..=10 {
            update(&mut left, DIMS, None, &mut rng);
            update(&mut right, DIMS, None, &mut rng);
            assert_eq!(left.pos.x, 400.0 - 5.0 * tick as f32);
            assert_eq!(right.pos.x, 400.0 + 5.0 * tick as f32);
            assert_eq!(left.pos.y, 100.0);
            assert_eq!(right.pos.y, 100.0);
        }
    }

    #[test]
    fn pointer_off_surface_is_ignored() {
        let mut rng = fastrand::Rng::with_seed(2);
        let mut m = fish(400.0, 100.0, PI);
        let pointer = PointerState {
            hovering: false,
            x: 700.0,
            y: 500.0,
        };
        update(&mut m, DIMS, Some(&pointer), &mut rng);
        assert_eq!(m.pos, Vec2::new(395.0, 100.0));
    }

    #[test]
    fn snaps_tilted_heading_back_to_horizontal() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut up_left = fish(400.0, 100.0, 2.5);
        let mut down_right = fish(400.0, 100.0, 0.7);
        up_left.eating = true;

        update(&mut up_left, DIMS, None, &mut rng);
        update(&mut down_right, DIMS, None, &mut rng);

        assert_eq!(up_left.heading, PI);
        assert!(!up_left.eating);
        assert_eq!(up_left.pos, Vec2::new(395.0, 100.0));
        assert_eq!(down_right.heading, 0.0);
        assert_eq!(down_right.pos, Vec2::new(405.0, 100.0));
    }

    #[test]
    fn leftward_fish_respawns_after_leaving() {
        let mut rng = fastrand::Rng::with_seed(4);
        let mut m = fish(-41.0, 100.0, PI);
        update(&mut m, DIMS, None, &mut rng);

        assert!((MIN_MOTIF_SIZE..MAX_MOTIF_SIZE).contains(&m.size));
        assert!((MIN_MOTIF_VELOCITY..MAX_MOTIF_VELOCITY).contains(&m.speed));
        if m.facing_left() {
            assert_eq!(m.pos.x, DIMS.width);
        } else {
            assert_eq!(m.pos.x, -m.size);
        }
    }

    #[test]
    fn rightward_fish_respawns_after_leaving() {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut m = fish(801.0, 100.0, 0.0);
        update(&mut m, DIMS, None, &mut rng);
        assert!(m.pos.x == DIMS.width || m.pos.x == -m.size);
    }

    #[test]
    fn chases_distant_bait() {
        let mut rng = fastrand::Rng::with_seed(6);
        let mut m = fish(100.0, 100.0, PI);
        update(&mut m, DIMS, Some(&hovering(400.0, 500.0)), &mut rng);

        let expected_heading = (400.0f32).atan2(300.0);
        assert_eq!(m.heading, expected_heading);
        assert!(!m.eating);
        assert!(((m.pos - Vec2::new(100.0, 100.0)).length() - 5.0).abs() < 1e-4);
        assert!(m.pos.x > 100.0 && m.pos.y > 100.0);
    }

    #[test]
    fn eating_holds_heading_until_bait_escapes() {
        let mut rng = fastrand::Rng::with_seed(7);
        let pointer = hovering(400.0, 300.0);
        let mut m = fish(450.0, 310.0, PI);

        update(&mut m, DIMS, Some(&pointer), &mut rng);
        assert!(m.eating);
        let held = m.heading;

        for _ in 0..3 {
            update(&mut m, DIMS, Some(&pointer), &mut rng);
            assert!(m.eating);
            assert_eq!(m.heading, held);
        }

        let far = hovering(100.0, 300.0);
        update(&mut m, DIMS, Some(&far), &mut rng);
        assert!(!m.eating);
        assert!(m.facing_left());
    }

    #[test]
    fn one_close_axis_is_not_enough() {
        let mut rng = fastrand::Rng::with_seed(8);
        let mut m = fish(410.0, 100.0, 0.0);
        update(&mut m, DIMS, Some(&hovering(400.0, 300.0)), &mut rng);
        assert!(!m.eating);
    }
}
