mod print;
mod setup;

use clap::Parser;
use greeter::api;
use greeter::error::Result;
use log::LevelFilter;
use std::io::{self, Write};

use print::print_messages;
use setup::{escaped, Cli};

pub fn run() -> Result<()> {
    init_logging();

    let cli = Cli::parse_from(escaped(std::env::args_os()));
    let result = api::greet(&cli.names);
    log::debug!(
        "read {} argument(s), greeted {} name(s)",
        cli.names.len(),
        result.greeted.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_messages(&mut out, &result.messages)?;
    out.flush()?;
    Ok(())
}

/// Warnings only unless `RUST_LOG` says otherwise, so a normal run leaves
/// stderr empty.
fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}
