// Author: Dustin Pilgrim
// License: MIT

use crate::cli::{Args, Command};
use crate::core::format::{format_clock, format_span};
use crate::core::info::InfoSnapshot;
use crate::core::phase::Preset;
use crate::core::session::Session;
use crate::daemon::AnyError;
use crate::services::clock::now_ms;

pub async fn run(args: Args) -> Result<(), AnyError> {
    let Some(cmd) = args.command.clone() else {
        return Ok(());
    };

    match cmd {
        Command::Run(run_args) => crate::app::session_mode::run(args, run_args).await,

        Command::Info { json } => {
            let (settings, source) = crate::config::load(args.config.as_deref())
                .map_err(|e| format!("{e:#}"))?;
            let session = Session::new(settings)?;
            let info = InfoSnapshot::from_session(&session, now_ms());

            if json {
                println!("{}", serde_json::to_string_pretty(&info.json)?);
            } else {
                println!("  Config │ {}", source.describe());
                println!("{}", info.pretty_text);
            }
            Ok(())
        }

        Command::Presets => {
            print!("{}", presets_table());
            Ok(())
        }

        Command::Format { ms } => {
            println!("{}", format_clock(ms));
            Ok(())
        }
    }
}

pub fn presets_table() -> String {
    let mut out = String::new();
    for preset in Preset::NAMED {
        let d = preset.durations();
        out.push_str(&format!(
            "{:<11} in {:<4} hold {:<4} out {:<4} pause {:<4} (cycle {})\n",
            preset.as_str(),
            format_span(d.inhale_ms),
            format_span(d.hold_ms),
            format_span(d.exhale_ms),
            format_span(d.pause_ms),
            format_span(d.cycle_ms()),
        ));
    }
    out
}
