//! Locating and loading league and player pool files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::models::{LeagueConfig, PoolPlayer};
use crate::{DraftError, Result, LEAGUE_FILE_ENV_VAR};

/// Path: ~/.config/draft-assist/league.json
pub fn default_league_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("draft-assist").join("league.json")
}

/// Pick the league file: explicit path, then the environment variable, then
/// the default location if a file exists there.
pub fn resolve_league_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(LEAGUE_FILE_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let default = default_league_path();
    if default.is_file() {
        return Ok(default);
    }
    Err(DraftError::MissingLeagueFile {
        env_var: LEAGUE_FILE_ENV_VAR.to_string(),
        default_path: default.display().to_string(),
    })
}

pub fn load_league_config(path: &Path) -> Result<LeagueConfig> {
    debug!(path = %path.display(), "loading league file");
    let contents = fs::read_to_string(path)?;
    let config: LeagueConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

pub fn load_player_pool(path: &Path) -> Result<Vec<PoolPlayer>> {
    debug!(path = %path.display(), "loading player pool");
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
