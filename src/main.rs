use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use duel_chess::console::console_config::ConsoleConfig;
use duel_chess::console::console_loop::run_stdio_loop;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the console conversation.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid console configuration");
            eprintln!("duel_chess: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "console loop stopped on an I/O error");
            ExitCode::FAILURE
        }
    }
}
