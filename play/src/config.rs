use common::rl;
use std::{env, error::Error, fmt};

const PLAYER_INDEX_VAR: &str = "BALL_CHASER_PLAYER_INDEX";
const NAME_VAR: &str = "BALL_CHASER_NAME";
const START_MATCH_VAR: &str = "BALL_CHASER_START_MATCH";

/// The framework stores names in a fixed array of 32 UTF-16 code units,
/// including the terminator.
const MAX_NAME_LEN: usize = 31;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Which car in the match the bot drives.
    pub player_index: usize,
    pub name: String,
    /// Whether to start a 1v1 against a Psyonix bot on launch, rather than
    /// joining whatever match is already running.
    pub start_match: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_index: 0,
            name: "Ball Chaser".to_string(),
            start_match: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(PLAYER_INDEX_VAR) {
            config.player_index = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid(PLAYER_INDEX_VAR, &value))?;
        }

        if let Some(value) = lookup(NAME_VAR) {
            if value.is_empty() || value.encode_utf16().count() > MAX_NAME_LEN {
                return Err(ConfigError::invalid(NAME_VAR, &value));
            }
            config.name = value;
        }

        if let Some(value) = lookup(START_MATCH_VAR) {
            config.start_match = parse_bool(&value)
                .ok_or_else(|| ConfigError::invalid(START_MATCH_VAR, &value))?;
        }

        // The match we start only has two cars in it.
        let max_cars = if config.start_match { 2 } else { rl::MAX_CARS };
        if config.player_index >= max_cars {
            return Err(ConfigError::invalid(
                PLAYER_INDEX_VAR,
                &config.player_index.to_string(),
            ));
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str) -> Self {
        ConfigError::Invalid {
            var,
            value: value.to_string(),
        }
    }
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => write!(f, "invalid {}: {:?}", var, value),
        }
    }
}
