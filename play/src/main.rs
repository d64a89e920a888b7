#![warn(future_incompatible, rust_2018_compatibility, rust_2018_idioms, unused)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(clippy::all)]

use crate::config::Config;
use brain::{Brain, EEG};
use std::{convert::TryFrom, error::Error};

mod config;
mod logging;
mod overlay;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = Config::from_env()?;
    log::info!(
        "starting {:?} as player {}",
        config.name,
        config.player_index,
    );

    let rlbot = rlbot::init()?;
    if config.start_match {
        start_match(&rlbot, &config)?;
    }

    let player_index = i32::try_from(config.player_index)?;
    let mut packets = rlbot.packeteer();

    // Wait for RoundActive
    while !packets.next_ffi()?.GameInfo.RoundActive {}

    // Zero out our input, just to be safe
    rlbot.interface().update_player_input(Default::default(), player_index)?;

    let mut brain = Brain::ball_chaser();
    brain.set_player_index(config.player_index);
    let mut eeg = EEG::new();

    loop {
        let packet = common::deserialize_live_data_packet(&packets.next_ffi()?);
        logging::set_game_time(packet.game_info.seconds_elapsed);

        if packet.game_info.match_ended {
            log::info!("match ended, final score {:?}", packet.team_scores());
            break;
        }

        // If there are no cars in the packet (which happens briefly during
        // post-game), the packet is of no use to us.
        if packet.cars.is_empty() {
            log::warn!("skipping packet without any players");
            continue;
        }

        let output = brain.tick(&packet, &mut eeg);

        if let Err(err) = overlay::render(&rlbot, &eeg.take_drawables()) {
            log::debug!("could not render overlay: {}", err);
        }

        let input = common::translate_controller_output(&output);
        rlbot.interface().update_player_input(input, player_index)?;
    }

    // Stop the car before exiting (this is good safety advice IRL as well)
    rlbot.interface().update_player_input(Default::default(), player_index)?;

    Ok(())
}

fn start_match(rlbot: &rlbot::RLBot, config: &Config) -> Result<(), Box<dyn Error>> {
    let mut match_settings = rlbot::ffi::MatchSettings {
        NumPlayers: 2,
        MutatorSettings: rlbot::ffi::MutatorSettings {
            MatchLength: rlbot::ffi::MatchLength::Unlimited,
            ..Default::default()
        },
        SkipReplays: true,
        ..Default::default()
    };

    let me = config.player_index;
    let enemy = 1 - me;

    match_settings.PlayerConfiguration[me].Bot = true;
    match_settings.PlayerConfiguration[me].RLBotControlled = true;
    match_settings.PlayerConfiguration[me].set_name(&config.name);

    match_settings.PlayerConfiguration[enemy].Bot = true;
    match_settings.PlayerConfiguration[enemy].BotSkill = 1.0;
    match_settings.PlayerConfiguration[enemy].set_name("Psyonix");

    match_settings.PlayerConfiguration[1].Team = 1;

    rlbot.interface().start_match(match_settings)?;
    Ok(())
}
