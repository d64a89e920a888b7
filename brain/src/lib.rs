#![warn(future_incompatible, rust_2018_compatibility, rust_2018_idioms, unused)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(clippy::all)]

pub use crate::{
    behavior::{bang_bang, BallChase, Behavior, Context},
    brain::Brain,
    eeg::{color, Color, Drawable, EEG},
    mechanics::{correction_to, steer_correction},
};

mod behavior;
mod brain;
mod eeg;
mod mechanics;
