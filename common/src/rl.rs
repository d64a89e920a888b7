//! Various Rocket League constants.

/// The constant frequency of RL's physics engine.
pub const PHYSICS_TICK_FREQ: f32 = 120.0;

/// The number of seconds between physics ticks.
pub const PHYSICS_DT: f32 = 1.0 / PHYSICS_TICK_FREQ;

/// The most cars the framework will ever put in a packet.
pub const MAX_CARS: usize = 10;
