mod cli;
mod commands;
mod console;
mod logging;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log_level, logging::destination(cli.log_file.clone()));
    commands::run(cli.cmd)
}
