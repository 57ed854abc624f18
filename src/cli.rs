// Author: Dustin Pilgrim
// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "breathe",
    version = env!("CARGO_PKG_VERSION"),
    about = "Guided breathing with a meditation timer"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, action, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Start a breathing session (default)")]
    Run(RunArgs),

    #[command(about = "Display the effective configuration")]
    Info {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "List breathing presets")]
    Presets,

    #[command(about = "Show how a millisecond value appears on the session clock")]
    Format {
        #[arg(allow_negative_numbers = true)]
        ms: i64,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Count down from DURATION (e.g. "10m", "1h 30m")
    #[arg(long, value_name = "DURATION", conflicts_with = "stopwatch")]
    pub timer: Option<String>,

    /// Count up from zero
    #[arg(long, action)]
    pub stopwatch: bool,

    /// uplifting, relaxing or meditative
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// orbit or grow
    #[arg(long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Begin breathing right away instead of waiting for Enter
    #[arg(long, action)]
    pub autostart: bool,

    /// Keep the session open after the countdown ends
    #[arg(long, action)]
    pub stay: bool,
}
