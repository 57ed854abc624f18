// Author: Dustin Pilgrim
// License: MIT

mod app;
mod cli;
mod config;
mod core;
mod daemon;
mod log;
mod services;
mod utils;

use clap::Parser;

use crate::cli::{Command, RunArgs};
use crate::daemon::AnyError;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let args = cli::Args::parse();
    log::set_verbose(args.verbose);

    match args.command.clone() {
        Some(Command::Run(run_args)) => app::session_mode::run(args, run_args).await,
        None => app::session_mode::run(args, RunArgs::default()).await,
        Some(_) => app::command::run(args).await,
    }
}
