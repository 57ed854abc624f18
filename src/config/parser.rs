// Author: Dustin Pilgrim
// License: MIT

use eyre::{Result, WrapErr, eyre};
use rune_cfg::RuneConfig;

use crate::core::color::Rgb;
use crate::core::config::{AnimationStyle, SessionSettings};
use crate::core::phase::{Phase, Preset};
use crate::sdebug;

pub const INTERNAL_DEFAULT: &str = include_str!("../../defaults/breathe.rune");

/// Tries `breathe.<key>` as written, then with dashes for underscores.
fn lookup<T>(key: &str, get: impl Fn(&str) -> Option<T>) -> Option<T> {
    let path = format!("breathe.{key}");
    get(&path).or_else(|| get(&path.replace('_', "-")))
}

fn get_string(config: &RuneConfig, key: &str) -> Option<String> {
    lookup(key, |p| config.get::<String>(p).ok())
}

fn get_u64(config: &RuneConfig, key: &str) -> Option<u64> {
    lookup(key, |p| config.get::<u64>(p).ok())
}

fn get_bool(config: &RuneConfig, key: &str) -> Option<bool> {
    lookup(key, |p| config.get::<bool>(p).ok())
}

/// `value * factor` in milliseconds, or an error naming `key`.
fn scaled_ms(key: &str, value: u64, factor: u64) -> Result<u64> {
    value
        .checked_mul(factor)
        .ok_or_else(|| eyre!("{key}: duration too large"))
}

/// `<phase>_ms` wins over `<phase>_seconds`.
fn phase_override(config: &RuneConfig, phase: Phase) -> Result<Option<u64>> {
    let name = phase.as_str();
    if let Some(ms) = get_u64(config, &format!("{name}_ms")) {
        return Ok(Some(ms));
    }

    let key = format!("{name}_seconds");
    get_u64(config, &key)
        .map(|s| scaled_ms(&key, s, 1000))
        .transpose()
}

pub fn parse_settings(config: &RuneConfig) -> Result<SessionSettings> {
    let mut settings = SessionSettings::default();

    if let Some(name) = get_string(config, "preset") {
        let preset = Preset::parse(&name).map_err(|e| eyre!("{e}"))?;
        settings.durations = preset.durations();
    }

    if let Some(ms) = phase_override(config, Phase::Inhale)? {
        settings.durations.inhale_ms = ms;
    }
    if let Some(ms) = phase_override(config, Phase::Hold)? {
        settings.durations.hold_ms = ms;
    }
    if let Some(ms) = phase_override(config, Phase::Exhale)? {
        settings.durations.exhale_ms = ms;
    }
    if let Some(ms) = phase_override(config, Phase::Pause)? {
        settings.durations.pause_ms = ms;
    }

    if let Some(c) = get_string(config, "inhale_color") {
        settings.inhale_color = Rgb::parse(&c).map_err(|e| eyre!("inhale_color: {e}"))?;
    }
    if let Some(c) = get_string(config, "exhale_color") {
        settings.exhale_color = Rgb::parse(&c).map_err(|e| eyre!("exhale_color: {e}"))?;
    }

    if let Some(s) = get_string(config, "style") {
        settings.style = AnimationStyle::parse(&s).map_err(|e| eyre!("{e}"))?;
    }

    if let Some(v) = get_bool(config, "stopwatch") {
        settings.stopwatch = v;
    }
    if let Some(min) = get_u64(config, "session_minutes") {
        settings.session_ms = scaled_ms("session_minutes", min, 60 * 1000)?;
    }
    if let Some(v) = get_bool(config, "exit_on_finish") {
        settings.exit_on_finish = v;
    }
    if let Some(ms) = get_u64(config, "tick_ms") {
        settings.tick_ms = ms.max(10);
    }
    if let Some(ms) = get_u64(config, "clock_interval_ms") {
        settings.clock_interval_ms = ms.max(1);
    }

    settings.validate().map_err(|e| eyre!("{e}"))?;

    sdebug!(
        "Config",
        "parsed settings: preset={} style={} stopwatch={}",
        settings.preset().as_str(),
        settings.style.as_str(),
        settings.stopwatch
    );

    Ok(settings)
}

pub fn parse_str(text: &str) -> Result<SessionSettings> {
    let config = RuneConfig::from_str(text).wrap_err("failed to parse configuration")?;
    parse_settings(&config)
}

pub fn parse_internal_default() -> Result<SessionSettings> {
    parse_str(INTERNAL_DEFAULT).wrap_err("internal default configuration is invalid")
}
