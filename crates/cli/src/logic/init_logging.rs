use std::str::FromStr;
use std::sync::Once;

use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

const RUST_LOG_ENV: &str = "RUST_LOG";

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

fn init_logging_with_level(level: LevelFilter) {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let tag = level_tag(record.level());
            out.finish(format_args!("{time} {tag} > {message}"));
        })
        .level(level)
        .chain(std::io::stdout())
        .apply();

    if let Err(e) = result {
        println!("Failed to initialize logging with level `{level}`: {e}");
    }
}

fn level_from_env() -> LevelFilter {
    std::env::var(RUST_LOG_ENV)
        .ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Info)
}

static INIT: Once = Once::new();

/// Logging goes to stdout; the level comes from `RUST_LOG` and falls back
/// to `info`. Safe to call more than once.
pub fn init_logging() {
    INIT.call_once(|| init_logging_with_level(level_from_env()));
}
