use nalgebra::clamp;

/// The inputs the bot sends to its car on a single tick.
///
/// Only the two axes the bot actually drives with are modeled; every other
/// control is left at rest when this is handed to the framework.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ControllerOutput {
    /// `-1.0` is full left, `1.0` is full right.
    pub steer: f32,
    /// `-1.0` is full reverse, `1.0` is full forward.
    pub throttle: f32,
}

impl ControllerOutput {
    pub fn new(steer: f32, throttle: f32) -> Self {
        Self { steer, throttle }
    }

    /// Clamp both axes into the range the framework accepts.
    pub fn clamped(self) -> Self {
        Self {
            steer: clamp(self.steer, -1.0, 1.0),
            throttle: clamp(self.throttle, -1.0, 1.0),
        }
    }
}

pub fn translate_controller_output(output: &ControllerOutput) -> rlbot::ffi::PlayerInput {
    rlbot::ffi::PlayerInput {
        Throttle: output.throttle,
        Steer: output.steer,
        ..Default::default()
    }
}
