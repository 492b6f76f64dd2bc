use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

const CRATE_TARGET: &str = "github_release_history";

fn logger(log_level_filter: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(Some(CRATE_TARGET), log_level_filter)
        .filter(None, LevelFilter::Info)
        .init();
}

fn debug_logger(log_level_filter: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}:{} - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.file().unwrap_or("<unknown>"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter(Some(CRATE_TARGET), log_level_filter)
        .filter(None, LevelFilter::Info)
        .init();
}

fn parse_settings(debug: Option<String>, level: Option<String>) -> (bool, LevelFilter) {
    let debug_mode = debug
        .and_then(|v| v.trim().parse::<bool>().ok())
        .unwrap_or(false);
    let log_level_filter = level
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    (debug_mode, log_level_filter)
}

pub fn init_from_environment() {
    let (debug_mode, log_level_filter) = parse_settings(
        std::env::var("LOG_DEBUG").ok(),
        std::env::var("LOG_LEVEL").ok(),
    );

    if debug_mode {
        debug_logger(log_level_filter);
        log::debug!("Debug logger initialized");
    } else {
        logger(log_level_filter);
        log::debug!("Logger initialized");
    }
}
