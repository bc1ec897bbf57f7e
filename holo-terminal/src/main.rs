//! holo - rotating fourteen-segment text in the terminal
//!
//! Shows the given text, or the current time when none is given.
//! Controls:
//!   - Q / Esc / Ctrl-C: Quit

use holo_terminal::{cli, logger, TerminalApp};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "holo".to_string());

    if let Err(e) = logger::init_from_env() {
        eprintln!("{program}: {e:#}");
    }

    let config = match cli::parse_args(args) {
        Ok(cli::Command::Run(config)) => config,
        Ok(cli::Command::Help) => {
            eprint!("{}", cli::usage(&program));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{program}: {e}\n");
            eprint!("{}", cli::usage(&program));
            return ExitCode::FAILURE;
        }
    };
    info!("starting with {config:?}");

    let mut app = TerminalApp::new(&config);
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("{program}: {e:#}");
            ExitCode::FAILURE
        }
    }
}
