use crate::{controls::ControllerOutput, snapshot::Orientation};
use nalgebra::Vector3;
use std::fmt::{self, Formatter};

pub trait PrettyPrint {
    type PrettyPrinter: fmt::Display;
    fn pretty(&self) -> Self::PrettyPrinter;
}

impl PrettyPrint for Vector3<f32> {
    type PrettyPrinter = Vector3PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

pub struct Vector3PrettyPrinter {
    data: Vector3<f32>,
}

impl fmt::Display for Vector3PrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "({:.0}, {:.0}, {:.0})",
            self.data.x, self.data.y, self.data.z,
        )
    }
}

impl PrettyPrint for Orientation {
    type PrettyPrinter = OrientationPrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

pub struct OrientationPrettyPrinter {
    data: Orientation,
}

impl fmt::Display for OrientationPrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "p{:.2} y{:.2} r{:.2}",
            self.data.pitch, self.data.yaw, self.data.roll,
        )
    }
}

impl PrettyPrint for ControllerOutput {
    type PrettyPrinter = ControllerOutputPrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

pub struct ControllerOutputPrettyPrinter {
    data: ControllerOutput,
}

impl fmt::Display for ControllerOutputPrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "steer {:+.2} throttle {:+.2}",
            self.data.steer, self.data.throttle,
        )
    }
}
