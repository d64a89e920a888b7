use env_logger::fmt::{Color, Formatter};
use lazy_static::lazy_static;
use log::{Level, Record};
use std::{
    io::{self, Write},
    sync::Mutex,
};

struct State {
    game_time: Option<f32>,
}

lazy_static! {
    static ref STATE: Mutex<State> = Mutex::new(State { game_time: None });
}

pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(format)
        .init();
}

/// Stamp subsequent log lines with the game clock instead of the wall clock.
pub fn set_game_time(game_time: f32) {
    if let Ok(mut state) = STATE.lock() {
        state.game_time = Some(game_time);
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Cyan,
        Level::Trace => Color::White,
    }
}

/// `[<game time>s LEVEL target] message`, or the wall clock until the first
/// packet has arrived.
fn format(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let clock = match STATE.lock().ok().and_then(|state| state.game_time) {
        Some(game_time) => format!("{:>8.3}s", game_time),
        None => buf.timestamp().to_string(),
    };

    let mut level_style = buf.style();
    level_style
        .set_color(level_color(record.level()))
        .set_bold(record.level() <= Level::Warn);

    let mut target_style = buf.style();
    target_style.set_color(Color::Black).set_intense(true);

    writeln!(
        buf,
        "[{} {:<5} {}] {}",
        clock,
        level_style.value(record.level()),
        target_style.value(record.target()),
        record.args(),
    )
}
