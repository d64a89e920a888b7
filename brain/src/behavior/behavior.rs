use crate::eeg::EEG;
use common::{Ball, Car, ControllerOutput, Packet};

/// A policy that turns the current game state into controller inputs.
pub trait Behavior: Send {
    /// A very short string identifying the behavior; usually just the name of
    /// the object.
    fn name(&self) -> &str;

    fn execute(&mut self, ctx: &mut Context<'_>) -> ControllerOutput;
}

pub struct Context<'a> {
    pub packet: &'a Packet,
    pub eeg: &'a mut EEG,
    me: &'a Car,
}

impl<'a> Context<'a> {
    pub fn new(packet: &'a Packet, me: &'a Car, eeg: &'a mut EEG) -> Self {
        Self { packet, eeg, me }
    }

    /// Return the player we are controlling.
    pub fn me(&self) -> &'a Car {
        self.me
    }

    pub fn ball(&self) -> &'a Ball {
        &self.packet.ball
    }
}
