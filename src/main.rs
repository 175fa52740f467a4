//! Shassert CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use shassert::cli::{Cli, CommandDispatcher};
use shassert::config::load_config;
use shassert::shell::is_ci;
use shassert::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO, or ERROR with `--quiet`
///
/// Logs go to stderr; stdout carries generated data.
fn init_tracing(debug: bool, mode: OutputMode) {
    let filter = if debug {
        EnvFilter::new("shassert=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(mode.log_directive()))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            // Usage errors are check failures too: exit 1, not clap's 2.
            _ => {
                let _ = e.print();
                return ExitCode::from(1);
            }
        },
    };
    let mode = OutputMode::from_flags(cli.quiet, cli.verbose);
    init_tracing(cli.debug, mode);

    tracing::debug!("shassert starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), mode);

    let cwd = std::env::current_dir().unwrap_or_default();
    let config = match load_config(&cwd, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(cwd, config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
