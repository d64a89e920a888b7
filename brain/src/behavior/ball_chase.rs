use crate::{
    behavior::{Behavior, Context},
    eeg::{color, Drawable},
    mechanics::steer_correction,
};
use common::{prelude::*, ControllerOutput};
use nameof::name_of_type;

/// Within this many radians of facing the ball, go full speed.
const FULL_THROTTLE_BAND: f32 = 0.5;

/// Throttle while still swinging around towards the ball.
const TURNING_THROTTLE: f32 = 0.2;

/// Drive at the ball, forever, with the steering wheel pinned to one side or
/// the other.
pub struct BallChase;

impl BallChase {
    pub fn new() -> Self {
        BallChase
    }
}

impl Default for BallChase {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for BallChase {
    fn name(&self) -> &str {
        name_of_type!(BallChase)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> ControllerOutput {
        let me = ctx.me();
        let ball_loc = ctx.ball().physics.location;
        let correction = steer_correction(&me.physics, ball_loc);

        log::trace!(
            "car {} at {} facing {}, ball at {}, correction {:.3}",
            me.index,
            me.physics.location.pretty(),
            me.physics.rotation.pretty(),
            ball_loc.pretty(),
            correction,
        );
        ctx.eeg.draw(Drawable::text_3d(
            me.physics.location,
            "Lets get that ball",
            color::WHITE,
        ));

        bang_bang(correction)
    }
}

/// Map a steering correction onto all-or-nothing steering.
///
/// A positive correction steers fully one way and anything else fully the
/// other. The throttle is only floored while roughly lined up.
pub fn bang_bang(correction: f32) -> ControllerOutput {
    let steer = if correction > 0.0 { -1.0 } else { 1.0 };
    let throttle = if correction > -FULL_THROTTLE_BAND && correction < FULL_THROTTLE_BAND {
        1.0
    } else {
        TURNING_THROTTLE
    };
    ControllerOutput { steer, throttle }
}
