// Author: Dustin Pilgrim
// License: MIT

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::app::terminal::TerminalObserver;
use crate::cli::{Args, RunArgs};
use crate::config::ConfigSource;
use crate::core::color::Rgb;
use crate::core::config::{AnimationStyle, SessionSettings};
use crate::core::events::Event;
use crate::core::format::format_clock_ms;
use crate::core::phase::Preset;
use crate::core::session_msg::SessionMsg;
use crate::daemon::{AnyError, Daemon};
use crate::services::clock::now_ms;
use crate::services::input::Reload;
use crate::{sdebug, serror, sinfo};

/// Applies `run` flags on top of the loaded settings.
pub fn apply_run_args(mut settings: SessionSettings, run: &RunArgs) -> Result<SessionSettings, AnyError> {
    if let Some(timer) = run.timer.as_deref() {
        let length: Duration = crate::utils::parse_duration(timer)?;
        settings.stopwatch = false;
        settings.session_ms = u64::try_from(length.as_millis())?;
    }
    if run.stopwatch {
        settings.stopwatch = true;
    }
    if let Some(name) = run.preset.as_deref() {
        let preset = Preset::parse(name)?;
        if preset != Preset::Custom {
            settings.durations = preset.durations();
        }
    }
    if let Some(style) = run.style.as_deref() {
        settings.style = AnimationStyle::parse(style)?;
    }
    if run.stay {
        settings.exit_on_finish = false;
    }

    settings.validate()?;
    Ok(settings)
}

/// Config file plus `run` flags. Used at startup and again on reload, so
/// flags like `--timer` survive a reload.
pub fn load_settings(
    config: Option<&Path>,
    run_args: &RunArgs,
) -> Result<(SessionSettings, ConfigSource), AnyError> {
    let (settings, source) = crate::config::load(config).map_err(|e| {
        serror!("Breathe", "{:#}", e);
        format!("{e:#}")
    })?;
    Ok((apply_run_args(settings, run_args)?, source))
}

/// Runs an interactive session until Ctrl+C, `q`, or a finished countdown.
///
/// Once the loop ends the process exits from here: the stdin reader sits
/// on a blocking thread that the runtime would otherwise wait on until the
/// next line of input.
pub async fn run(args: Args, run_args: RunArgs) -> Result<(), AnyError> {
    let (settings, source) = load_settings(args.config.as_deref(), &run_args)?;

    sinfo!("Breathe", "starting (config: {})", source.describe());
    sdebug!(
        "Breathe",
        "rhythm {}ms/{}ms/{}ms/{}ms, colors {} -> {}",
        settings.durations.inhale_ms,
        settings.durations.hold_ms,
        settings.durations.exhale_ms,
        settings.durations.pause_ms,
        settings.inhale_color,
        settings.exhale_color
    );

    print_banner(&settings);

    let tick_ms = settings.tick_ms;
    let mut daemon = Daemon::new(settings, TerminalObserver::new())?;

    let (tx, rx) = mpsc::channel::<SessionMsg>(256);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(crate::services::ticker::run_ticker(tx.clone(), tick_ms));
    let reload: Reload = {
        let config = args.config.clone();
        let run_args = run_args.clone();
        Box::new(move || load_settings(config.as_deref(), &run_args).map(|(s, _)| s))
    };
    let input_task = tokio::spawn(crate::services::input::run_input(
        tx.clone(),
        shutdown_rx.clone(),
        reload,
    ));

    if run_args.autostart {
        let _ = tx.send(SessionMsg::Event(Event::Start { now_ms: now_ms() })).await;
    }

    let mut daemon_task = tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move { daemon.run(rx, shutdown_rx, shutdown_tx).await }
    });

    let result = tokio::select! {
        res = &mut daemon_task => {
            match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err) as AnyError),
            }
        }

        _ = tokio::signal::ctrl_c() => {
            sinfo!("Breathe", "received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);

            match daemon_task.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err) as AnyError),
            }
        }
    };

    input_task.abort();
    let _ = std::io::stdout().flush();

    match result {
        Ok(()) => {
            sinfo!("Breathe", "shutdown complete");
            std::process::exit(0);
        }
        Err(e) => {
            serror!("Breathe", "session loop failed: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_banner(settings: &SessionSettings) {
    let d = settings.durations;
    let clock = if settings.stopwatch {
        "stopwatch".to_string()
    } else {
        format!("timer {}", format_clock_ms(settings.session_ms))
    };

    println!(
        "breathe: {} rhythm (in {}s, hold {}s, out {}s, pause {}s), {}, {} style",
        settings.preset().as_str(),
        d.inhale_ms as f64 / 1000.0,
        d.hold_ms as f64 / 1000.0,
        d.exhale_ms as f64 / 1000.0,
        d.pause_ms as f64 / 1000.0,
        clock,
        settings.style.as_str()
    );
    println!(
        "colors: {} -> {}. Press Enter to start.",
        paint(settings.inhale_color),
        paint(settings.exhale_color)
    );
}

fn paint(color: Rgb) -> String {
    format!("{}{}\x1b[0m", color.ansi_fg(), color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_flag_switches_to_countdown() {
        let run = RunArgs { timer: Some("1h 30m".into()), ..RunArgs::default() };
        let s = apply_run_args(SessionSettings::default(), &run).unwrap();
        assert!(!s.stopwatch);
        assert_eq!(s.session_ms, 5_400_000);
    }

    #[test]
    fn preset_and_style_flags() {
        let run = RunArgs {
            preset: Some("meditative".into()),
            style: Some("grow".into()),
            stay: true,
            ..RunArgs::default()
        };
        let s = apply_run_args(SessionSettings::default(), &run).unwrap();
        assert_eq!(s.preset(), Preset::Meditative);
        assert_eq!(s.style, AnimationStyle::Grow);
        assert!(!s.exit_on_finish);
    }

    #[test]
    fn custom_preset_keeps_configured_rhythm() {
        let mut base = SessionSettings::default();
        base.durations.hold_ms = 2500;
        let run = RunArgs { preset: Some("custom".into()), ..RunArgs::default() };

        let s = apply_run_args(base.clone(), &run).unwrap();
        assert_eq!(s.durations, base.durations);
    }

    #[test]
    fn reload_keeps_run_flags() {
        let path = std::env::temp_dir().join(format!("breathe-reload-{}.rune", std::process::id()));
        std::fs::write(&path, "breathe:\n  stopwatch true\n  style \"orbit\"\nend\n").unwrap();

        let run = RunArgs {
            timer: Some("10m".into()),
            style: Some("grow".into()),
            ..RunArgs::default()
        };
        let (s, source) = load_settings(Some(&path), &run).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(source, ConfigSource::File(path));
        assert!(!s.stopwatch);
        assert_eq!(s.session_ms, 600_000);
        assert_eq!(s.style, AnimationStyle::Grow);
    }

    #[test]
    fn bad_flags_are_errors() {
        let run = RunArgs { timer: Some("soon".into()), ..RunArgs::default() };
        assert!(apply_run_args(SessionSettings::default(), &run).is_err());

        let run = RunArgs { preset: Some("sleepy".into()), ..RunArgs::default() };
        assert!(apply_run_args(SessionSettings::default(), &run).is_err());
    }
}
