use std::io::Write;

use log::{Level, LevelFilter};

use crate::infra::runner::escape_data;

/// Routes `log` records to stdout as workflow commands the runner understands.
pub fn init_logging(debug: bool) {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), log_level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                workflow_line(record.level(), &record.args().to_string())
            )
        })
        .init();

    log::debug!("Logging initialized with level: {log_level}");
}

fn workflow_line(level: Level, message: &str) -> String {
    match level {
        Level::Error => format!("::error::{}", escape_data(message)),
        Level::Warn => format!("::warning::{}", escape_data(message)),
        Level::Info => message.to_string(),
        Level::Debug | Level::Trace => format!("::debug::{}", escape_data(message)),
    }
}
