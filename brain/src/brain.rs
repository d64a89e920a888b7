use crate::{
    behavior::{BallChase, Behavior, Context},
    eeg::{color, Drawable, EEG},
};
use common::{prelude::*, rl, ControllerOutput, Packet};
use nameof::name_of_type;
use std::time::{Duration, Instant};

pub struct Brain {
    behavior: Box<dyn Behavior>,
    player_index: Option<usize>,
}

impl Brain {
    pub fn with_behavior(behavior: impl Behavior + 'static) -> Self {
        Self {
            behavior: Box::new(behavior),
            player_index: None,
        }
    }

    pub fn ball_chaser() -> Self {
        Self::with_behavior(BallChase::new())
    }

    pub fn set_player_index(&mut self, player_index: usize) {
        self.player_index = Some(player_index);
    }

    pub fn tick(&mut self, packet: &Packet, eeg: &mut EEG) -> ControllerOutput {
        let player_index = match self.player_index {
            Some(i) => i,
            None => {
                log::warn!("{}: no player index set", name_of_type!(Brain));
                return ControllerOutput::default();
            }
        };
        let me = match packet.car(player_index) {
            Some(car) => car,
            None => {
                log::warn!(
                    "{}: player {} is not in the packet ({} cars)",
                    name_of_type!(Brain),
                    player_index,
                    packet.cars.len(),
                );
                return ControllerOutput::default();
            }
        };

        eeg.draw(Drawable::print(self.behavior.name(), color::GREEN));

        let start = Instant::now();
        let mut ctx = Context::new(packet, me, eeg);
        let result = self.behavior.execute(&mut ctx).clamped();
        let elapsed = start.elapsed();

        log::trace!("{}", result.pretty());

        // RL's physics runs at 120Hz, which leaves ~8ms to make a decision.
        if elapsed >= Duration::from_secs_f32(rl::PHYSICS_DT) {
            log::warn!(
                "{}: slow frame took {}ms",
                name_of_type!(Brain),
                elapsed.as_millis(),
            );
        }

        result
    }
}
