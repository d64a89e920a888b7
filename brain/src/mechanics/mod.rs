pub use self::steer_correction::{correction_to, steer_correction};

mod steer_correction;
