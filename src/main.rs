//! soprano - build and visualize chat components from the command line

mod cli;
mod error;
mod log_init;
mod preview;

use std::io::{self, Write};
use std::process::ExitCode;

use chat::encode::{to_ansi, to_html};
use clap::Parser;

use crate::cli::{Cli, OutputMode};
use crate::error::Result;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("exiting after error: {:?}", err);
            let _ = writeln!(io::stderr(), "{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let env_level = std::env::var(log_init::LOG_ENV).ok();
    let level = log_init::resolve_level(cli.verbose, env_level.as_deref());
    log_init::init_logger(level, cli.log_file.as_deref())?;

    let json = cli.read_input()?;
    let component = chat::parser::parse_str_with_limits(&json, &cli.limits())?;
    log::info!(
        "parsed {} components, {} levels deep",
        component.node_count(),
        component.depth()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.mode() {
        OutputMode::Ansi => writeln!(out, "{}", to_ansi(&component, false, !cli.no_reset, None))?,
        OutputMode::EscapedAnsi => {
            writeln!(out, "{}", to_ansi(&component, true, !cli.no_reset, None))?
        }
        OutputMode::Html => writeln!(out, "{}", to_html(&component))?,
        OutputMode::Preview => preview::preview(&component, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
