use common::{prelude::*, Physics};
use nalgebra::Vector3;

/// Returns how far (in radians) the car needs to turn to face `target_loc`.
///
/// Only the ground plane is considered. The sign follows [`correction_to`].
pub fn steer_correction(car: &Physics, target_loc: Vector3<f32>) -> f32 {
    let car_direction = car.facing_vector();
    let car_to_target = target_loc - car.location;
    correction_to(car_direction, car_to_target)
}

/// Returns the signed angle from `car_direction` to `ideal_direction`, taking
/// the short way around. Only `x` and `y` are read.
///
/// RL's axes are left-handed, so `x` is negated before measuring either angle.
/// The result is in `-PI..=PI`. NaN inputs produce NaN.
pub fn correction_to(car_direction: Vector3<f32>, ideal_direction: Vector3<f32>) -> f32 {
    let current = f32::atan2(car_direction.y, -car_direction.x);
    let ideal = f32::atan2(ideal_direction.y, -ideal_direction.x);
    (ideal - current).shortest_turn()
}

#[cfg(test)]
mod tests {
    use crate::mechanics::{correction_to, steer_correction};
    use common::{Orientation, Physics};
    use lazy_static::lazy_static;
    use nalgebra::Vector3;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-5;

    lazy_static! {
        static ref FACING_X: Vector3<f32> = Vector3::new(1.0, 0.0, 0.0);
        static ref DIRECTIONS: Vec<Vector3<f32>> = (0..36)
            .map(|i| {
                let (sin, cos) = (i as f32 * 10.0_f32.to_radians()).sin_cos();
                Vector3::new(cos * 300.0, sin * 300.0, 0.0)
            })
            .collect();
    }

    fn car_at(x: f32, y: f32, yaw: f32) -> Physics {
        Physics {
            location: Vector3::new(x, y, 17.01),
            rotation: Orientation::new(0.0, yaw, 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn straight_ahead() {
        let correction = correction_to(*FACING_X, Vector3::new(1.0, 0.0, 0.0));
        assert!(correction.abs() < EPS, "{}", correction);
    }

    #[test]
    fn directly_behind() {
        let correction = correction_to(*FACING_X, Vector3::new(-1.0, 0.0, 0.0));
        assert!((correction.abs() - PI).abs() < EPS, "{}", correction);
    }

    #[test]
    fn quarter_turn() {
        // With x negated, +y is a negative correction from +x.
        let correction = correction_to(*FACING_X, Vector3::new(0.0, 1.0, 0.0));
        assert!((correction - -PI / 2.0).abs() < EPS, "{}", correction);

        let correction = correction_to(*FACING_X, Vector3::new(0.0, -1.0, 0.0));
        assert!((correction - PI / 2.0).abs() < EPS, "{}", correction);
    }

    #[test]
    fn ignores_z() {
        let flat = correction_to(*FACING_X, Vector3::new(1.0, 1.0, 0.0));
        let lofted = correction_to(Vector3::new(1.0, 0.0, 5.0), Vector3::new(1.0, 1.0, -900.0));
        assert_eq!(flat, lofted);
    }

    #[test]
    fn always_takes_the_short_way() {
        for facing in &*DIRECTIONS {
            for ideal in &*DIRECTIONS {
                let correction = correction_to(*facing, *ideal);
                assert!(
                    correction.abs() <= PI + EPS,
                    "{:?} {:?} {}",
                    facing,
                    ideal,
                    correction,
                );
            }
        }
    }

    #[test]
    fn swapping_directions_flips_sign() {
        for facing in &*DIRECTIONS {
            for ideal in &*DIRECTIONS {
                let there = correction_to(*facing, *ideal);
                let back = correction_to(*ideal, *facing);
                // At exactly half a turn either sign is acceptable.
                if (there.abs() - PI).abs() < 1e-3 {
                    continue;
                }
                assert!((there + back).abs() < EPS, "{} {}", there, back);
            }
        }
    }

    #[test]
    fn shrinks_as_target_lines_up() {
        let car = car_at(0.0, 0.0, 0.0);
        let mut prev = std::f32::INFINITY;
        for &offset in &[1000.0, 300.0, 100.0, 10.0, 1.0, 0.01] {
            let correction = steer_correction(&car, Vector3::new(1000.0, offset, 0.0)).abs();
            assert!(correction < prev, "{} {}", offset, correction);
            prev = correction;
        }
        assert!(prev < 1e-4, "{}", prev);
    }

    #[test]
    fn measures_from_car_location() {
        let car = car_at(500.0, 500.0, PI / 2.0);
        // Ball is straight up the y axis from the car, and the car faces +y.
        let correction = steer_correction(&car, Vector3::new(500.0, 2500.0, 93.0));
        assert!(correction.abs() < EPS, "{}", correction);

        // Ball is dead behind.
        let correction = steer_correction(&car, Vector3::new(500.0, -2500.0, 93.0));
        assert!((correction.abs() - PI).abs() < EPS, "{}", correction);
    }

    #[test]
    fn nan_in_nan_out() {
        let correction = correction_to(Vector3::new(std::f32::NAN, 0.0, 0.0), *FACING_X);
        assert!(correction.is_nan());
    }
}
