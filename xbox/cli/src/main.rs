use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

mod cli;
mod commands;
mod input;
mod keys;

use self::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());
    cli.run()
}

/**
    `RUST_LOG` sets the filter unless `-v` is given on the command line.
*/
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}
