pub use crate::{math::ExtendF32, pretty::PrettyPrint};
