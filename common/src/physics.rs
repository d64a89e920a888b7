//! Various mathematical truths about Rocket League.

use crate::snapshot::Orientation;
use nalgebra::Vector3;

/// Returns the direction a car with the given orientation is facing, projected
/// onto the ground plane.
///
/// This is deliberately not a true 3D forward axis: `z` is always zero and
/// roll is ignored. The result is only unit length when pitch is zero.
pub fn car_facing_vector(rot: &Orientation) -> Vector3<f32> {
    let (sin_yaw, cos_yaw) = rot.yaw.sin_cos();
    let cos_pitch = rot.pitch.cos();
    Vector3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, 0.0)
}

#[cfg(test)]
mod tests {
    use crate::{physics::car_facing_vector, snapshot::Orientation};
    use std::f32::consts::PI;

    const EPS: f32 = 1e-6;

    #[test]
    fn z_is_always_zero() {
        for i in -8..=8 {
            for j in -8..=8 {
                let rot = Orientation::new(i as f32 * 0.4, j as f32 * 0.4, 1.0);
                assert_eq!(car_facing_vector(&rot).z, 0.0);
            }
        }
    }

    #[test]
    fn level_car() {
        let cases = [
            (0.0, (1.0, 0.0)),
            (PI / 2.0, (0.0, 1.0)),
            (PI, (-1.0, 0.0)),
            (-PI / 2.0, (0.0, -1.0)),
        ];
        for &(yaw, (x, y)) in &cases {
            let facing = car_facing_vector(&Orientation::new(0.0, yaw, 0.0));
            println!("{} {:?}", yaw, facing);
            assert!((facing.x - x).abs() < EPS, "{}", facing.x);
            assert!((facing.y - y).abs() < EPS, "{}", facing.y);
        }
    }

    #[test]
    fn pitch_shortens_projection() {
        let facing = car_facing_vector(&Orientation::new(PI / 3.0, 0.0, 0.0));
        assert!((facing.x - 0.5).abs() < EPS, "{}", facing.x);
        assert!(facing.y.abs() < EPS, "{}", facing.y);
    }

    #[test]
    fn roll_is_ignored() {
        let a = car_facing_vector(&Orientation::new(0.2, 1.1, 0.0));
        let b = car_facing_vector(&Orientation::new(0.2, 1.1, 2.5));
        assert_eq!(a, b);
    }
}
