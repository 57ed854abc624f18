// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, eyre};
use rune_cfg::RuneConfig;

use crate::core::config::SessionSettings;
use crate::sdebug;

pub mod parser;

/// Where the effective settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    InternalDefault,
}

impl ConfigSource {
    pub fn describe(&self) -> String {
        match self {
            ConfigSource::File(p) => p.display().to_string(),
            ConfigSource::InternalDefault => "built-in defaults".to_string(),
        }
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("breathe").join("breathe.rune"))
}

pub fn system_config_path() -> PathBuf {
    PathBuf::from("/etc/breathe/breathe.rune")
}

/// Determine the config file to use: user config first, then system config.
pub fn find_config_path() -> Option<PathBuf> {
    user_config_path()
        .filter(|p| p.exists())
        .or_else(|| Some(system_config_path()).filter(|p| p.exists()))
}

pub fn load_from_path(path: &Path) -> Result<SessionSettings> {
    let path_buf = path.to_path_buf();
    if !path_buf.exists() {
        return Err(eyre!("config file {} does not exist", path_buf.display()));
    }

    let config = RuneConfig::from_file(&path_buf)
        .wrap_err_with(|| format!("failed to load config from {}", path_buf.display()))?;

    parser::parse_settings(&config)
        .wrap_err_with(|| format!("invalid config in {}", path_buf.display()))
}

/// `--config FILE` wins; otherwise the first existing default location,
/// otherwise the settings compiled into the binary.
pub fn load(explicit: Option<&Path>) -> Result<(SessionSettings, ConfigSource)> {
    if let Some(path) = explicit {
        let settings = load_from_path(path)?;
        return Ok((settings, ConfigSource::File(path.to_path_buf())));
    }

    if let Some(path) = find_config_path() {
        sdebug!("Config", "loading config from {}", path.display());
        let settings = load_from_path(&path)?;
        return Ok((settings, ConfigSource::File(path)));
    }

    sdebug!("Config", "using internal default configuration");
    Ok((parser::parse_internal_default()?, ConfigSource::InternalDefault))
}
