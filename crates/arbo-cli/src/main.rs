mod args;
mod driver;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;

use crate::args::Cli;

fn main() {
    let args = Cli::parse();

    let level = if args.quiet { log::LevelFilter::Warn } else { log::LevelFilter::Info };
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli(args) {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run_cli(args: Cli) -> Result<()> {
    log::debug!("{args:#?}");
    match &args.input_dir {
        Some(dir) => driver::run_batch(dir, &args),
        None => driver::run_single(&args),
    }
}
