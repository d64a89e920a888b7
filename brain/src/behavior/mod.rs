pub use self::{
    ball_chase::{bang_bang, BallChase},
    behavior::{Behavior, Context},
};

mod ball_chase;
mod behavior;
