/// Example: Render a single frame to stdout
///
/// Usage: cargo run --example snapshot -- [options] [TEXT...]
///
/// Accepts the same options as `holo`. The frame is 80x23 unless the
/// terminal reports a size.
use holo_terminal::{cli, TerminalApp};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = match cli::parse_args(std::env::args().skip(1))? {
        cli::Command::Run(config) => config,
        cli::Command::Help => {
            eprint!("{}", cli::usage("snapshot"));
            return Ok(());
        }
    };

    let (columns, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut out = io::stdout().lock();
    TerminalApp::new(&config).snapshot(&mut out, columns as usize, rows.saturating_sub(1) as usize)?;
    out.flush()?;
    Ok(())
}
