#![warn(future_incompatible, rust_2018_compatibility, rust_2018_idioms, unused)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(clippy::all)]

pub use crate::{
    controls::{translate_controller_output, ControllerOutput},
    pretty::PrettyPrint,
    snapshot::{
        deserialize_live_data_packet, Ball, Car, GameInfo, Orientation, Packet, Physics, Team,
        TeamInfo,
    },
};

pub mod controls;
pub mod math;
pub mod physics;
pub mod prelude;
mod pretty;
pub mod rl;
pub mod snapshot;
