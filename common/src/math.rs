use std::f32::consts::PI;

pub trait ExtendF32 {
    /// Turn an angular difference into the equivalent turn that goes the
    /// short way around.
    fn shortest_turn(self) -> Self;
}

impl ExtendF32 for f32 {
    fn shortest_turn(self) -> Self {
        shortest_turn(self)
    }
}

/// Wraps a difference of two angles (each in `-PI..=PI`) into `-PI..=PI`.
///
/// Only a single wrap is applied, so the input must already lie within
/// `-2PI..=2PI`. Values with a magnitude of exactly `PI` are left alone.
pub fn shortest_turn(angle: f32) -> f32 {
    if angle.abs() > PI {
        if angle < 0.0 {
            angle + 2.0 * PI
        } else {
            angle - 2.0 * PI
        }
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{shortest_turn, ExtendF32};
    use std::f32::consts::PI;

    const EPS: f32 = 1e-5;

    #[test]
    fn wraps_long_way_around() {
        let cases = [
            (3.5, 3.5 - 2.0 * PI),
            (-3.5, -3.5 + 2.0 * PI),
            (6.0, 6.0 - 2.0 * PI),
            (-6.0, -6.0 + 2.0 * PI),
        ];
        for &(angle, expected) in &cases {
            let result = shortest_turn(angle);
            assert!(
                (result - expected).abs() <= EPS,
                "{} {} {}",
                angle,
                expected,
                result,
            );
        }
    }

    #[test]
    fn boundary_values() {
        assert!((shortest_turn(3.5) - -2.783_185).abs() <= EPS);
        assert!((shortest_turn(-3.5) - 2.783_185).abs() <= EPS);
    }

    #[test]
    fn short_turns_untouched() {
        for &angle in &[0.0, 0.3, -0.3, 1.5, -3.0, PI, -PI] {
            assert_eq!(shortest_turn(angle), angle);
        }
    }

    #[test]
    fn extension_trait_agrees() {
        assert_eq!(4.0_f32.shortest_turn(), shortest_turn(4.0));
    }

    #[test]
    fn nan_passes_through() {
        assert!(shortest_turn(std::f32::NAN).is_nan());
    }
}
