//! Plain values mirroring the subset of RLBot's `LiveDataPacket` that the bot
//! reads.
//!
//! The framework's packet is a large C struct that gets rewritten in place on
//! every poll. Everything downstream works with these copies instead, so the
//! decision logic never touches the ffi layout directly.

use crate::physics;
use nalgebra::Vector3;
use smallvec::SmallVec;

/// A rotation in Unreal's convention, in radians.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Orientation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Physics {
    pub location: Vector3<f32>,
    pub rotation: Orientation,
    pub velocity: Vector3<f32>,
    pub angular_velocity: Vector3<f32>,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            location: Vector3::zeros(),
            rotation: Orientation::default(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl Physics {
    /// See [`physics::car_facing_vector`].
    pub fn facing_vector(&self) -> Vector3<f32> {
        physics::car_facing_vector(&self.rotation)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    pub fn from_ffi(team: u8) -> Self {
        match team {
            0 => Team::Blue,
            _ => Team::Orange,
        }
    }

    pub fn to_ffi(self) -> u8 {
        match self {
            Team::Blue => 0,
            Team::Orange => 1,
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        Team::Blue
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Car {
    /// The car's position in the framework's player list.
    pub index: usize,
    pub physics: Physics,
    pub demolished: bool,
    pub on_ground: bool,
    pub double_jumped: bool,
    pub team: Team,
    pub boost: i32,
    pub goals: i32,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Ball {
    pub physics: Physics,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GameInfo {
    pub seconds_elapsed: f32,
    pub game_time_remaining: f32,
    pub round_active: bool,
    pub match_ended: bool,
}

/// A team's entry on the scoreboard, as reported by the game.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TeamInfo {
    pub index: i32,
    pub score: i32,
}

#[derive(Debug, Default, Clone)]
pub struct Packet {
    pub cars: SmallVec<[Car; 4]>,
    pub ball: Ball,
    pub game_info: GameInfo,
    pub teams: SmallVec<[TeamInfo; 2]>,
}

impl Packet {
    /// Returns the car at the given framework index, if it is in the match.
    pub fn car(&self, index: usize) -> Option<&Car> {
        self.cars.iter().find(|c| c.index == index)
    }

    /// Return the scores for the blue and orange teams, straight off the
    /// scoreboard. Own goals count for the team that was scored on.
    pub fn team_scores(&self) -> [i32; 2] {
        let mut result = [0, 0];
        for team in &self.teams {
            if let Some(score) = result.get_mut(team.index as usize) {
                *score = team.score;
            }
        }
        result
    }
}

pub fn deserialize_live_data_packet(packet: &rlbot::ffi::LiveDataPacket) -> Packet {
    let num_cars = packet.NumCars.max(0) as usize;
    Packet {
        cars: packet
            .GameCars
            .iter()
            .take(num_cars)
            .enumerate()
            .map(|(index, info)| deserialize_player_info(index, info))
            .collect(),
        ball: deserialize_ball_info(&packet.GameBall),
        game_info: deserialize_game_info(&packet.GameInfo),
        teams: packet
            .Teams
            .iter()
            .take(packet.NumTeams.max(0) as usize)
            .map(deserialize_team_info)
            .collect(),
    }
}

fn deserialize_player_info(index: usize, info: &rlbot::ffi::PlayerInfo) -> Car {
    Car {
        index,
        physics: deserialize_physics(&info.Physics),
        demolished: info.Demolished,
        on_ground: info.OnGround,
        double_jumped: info.DoubleJumped,
        team: Team::from_ffi(info.Team),
        boost: info.Boost,
        goals: info.Score.Goals,
    }
}

fn deserialize_ball_info(info: &rlbot::ffi::BallInfo) -> Ball {
    Ball {
        physics: deserialize_physics(&info.Physics),
    }
}

fn deserialize_game_info(info: &rlbot::ffi::GameInfo) -> GameInfo {
    GameInfo {
        seconds_elapsed: info.TimeSeconds,
        game_time_remaining: info.GameTimeRemaining,
        round_active: info.RoundActive,
        match_ended: info.MatchEnded,
    }
}

fn deserialize_team_info(info: &rlbot::ffi::TeamInfo) -> TeamInfo {
    TeamInfo {
        index: info.TeamIndex,
        score: info.Score,
    }
}

fn deserialize_physics(physics: &rlbot::ffi::Physics) -> Physics {
    Physics {
        location: deserialize_vector3(&physics.Location),
        rotation: deserialize_rotator(&physics.Rotation),
        velocity: deserialize_vector3(&physics.Velocity),
        angular_velocity: deserialize_vector3(&physics.AngularVelocity),
    }
}

fn deserialize_vector3(vector3: &rlbot::ffi::Vector3) -> Vector3<f32> {
    Vector3::new(vector3.X, vector3.Y, vector3.Z)
}

fn deserialize_rotator(rotator: &rlbot::ffi::Rotator) -> Orientation {
    Orientation::new(rotator.Pitch, rotator.Yaw, rotator.Roll)
}
