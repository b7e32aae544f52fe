//! lode - LodeTime command-line entry point

use std::process::ExitCode;

use lodetime::cli::{self, Cli};
use lodetime::ui::output;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable selecting the log level (`info`, `debug`, ...).
const LOG_ENV: &str = "LODE_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let fallback = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(fallback);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
