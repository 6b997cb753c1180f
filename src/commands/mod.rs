//! Command implementations for the draft assistant CLI

pub mod availability;
pub mod board;
pub mod keeper;
pub mod rank;


use std::path::PathBuf;

use crate::{
    league::{load_league_config, resolve_league_path, LeagueConfig},
    Result,
};

/// Resolve the league file location and load it.
pub fn load_league(league: Option<PathBuf>) -> Result<LeagueConfig> {
    let path = resolve_league_path(league)?;
    load_league_config(&path)
}
