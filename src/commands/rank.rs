//! Rank command implementation
//!
//! Scores every player in a pool by how likely they are to survive until
//! the caller's next pick. Pools run to several hundred players, so the
//! estimates are computed in parallel.

use std::{cmp::Ordering, path::PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::{
    core::availability::{
        apply_availability_discount, estimate, DraftWindow, SigmaModel,
        DEFAULT_AVAILABILITY_DISCOUNT,
    },
    league::{load_player_pool, LeagueConfig, PoolPlayer},
    DraftError, Result, TeamId, LEAGUE_FILE_ENV_VAR,
};

use super::load_league;

/// Parameters for the rank command
#[derive(Debug, Clone)]
pub struct RankParams {
    pub players: PathBuf,
    pub league: Option<PathBuf>,
    pub team: Option<TeamId>,
    pub current_pick: u32,
    pub picks_until_turn: Option<u32>,
    /// Overrides the league file's sigma when set.
    pub sigma: Option<SigmaModel>,
    pub by_value: bool,
    pub limit: Option<usize>,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub adp: f64,
    pub sigma: f64,
    pub availability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// `value` reduced by how likely the player is to come back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_value: Option<f64>,
}

/// How to order ranked players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Most likely to still be there first.
    Availability,
    /// Highest adjusted value first; players without a value go last.
    AdjustedValue,
}

/// Estimate availability for every player and sort.
pub fn rank_players(
    pool: &[PoolPlayer],
    window: DraftWindow,
    sigma: &SigmaModel,
    discount: f64,
    order: RankOrder,
) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = pool
        .par_iter()
        .map(|player| {
            let result = estimate(player.adp, window, sigma);
            RankedPlayer {
                name: player.name.clone(),
                position: player.position.clone(),
                adp: player.adp,
                sigma: result.sigma,
                availability: result.probability,
                value: player.value,
                adjusted_value: player
                    .value
                    .map(|v| apply_availability_discount(v, result.probability, discount)),
            }
        })
        .collect();

    match order {
        RankOrder::Availability => ranked.sort_by(|a, b| {
            b.availability
                .total_cmp(&a.availability)
                .then_with(|| a.adp.total_cmp(&b.adp))
        }),
        RankOrder::AdjustedValue => ranked.sort_by(|a, b| {
            let by_value = match (a.adjusted_value, b.adjusted_value) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_value.then_with(|| a.adp.total_cmp(&b.adp))
        }),
    }

    ranked
}

/// Board positions from `current_pick` to `team`'s next open pick.
///
/// `current_pick` is a board index (keeper slots count), so the window's
/// target is the board index of that pick.
pub fn turn_from_league(league: &LeagueConfig, team: TeamId, current_pick: u32) -> Result<u32> {
    let board = league.board();
    if !board.draft_order().contains(&team) {
        return Err(DraftError::UnknownTeam {
            team: team.as_u32(),
        });
    }
    board
        .picks_until_turn(team, current_pick as usize)
        .ok_or(DraftError::NoRemainingPick {
            team: team.as_u32(),
        })
}

/// Handle the rank command
pub fn handle_rank(params: RankParams) -> Result<Vec<RankedPlayer>> {
    let pool = load_player_pool(&params.players)?;

    // A league named on the command line or in the environment always
    // supplies its discount; the default path is only tried for turn math.
    let league_supplied = params.league.is_some()
        || std::env::var_os(LEAGUE_FILE_ENV_VAR).is_some_and(|v| !v.is_empty());
    let needs_turn = params.picks_until_turn.is_none() && params.team.is_some();
    let league = if league_supplied || needs_turn {
        Some(load_league(params.league.clone())?)
    } else {
        None
    };

    let picks_until_turn = match params.picks_until_turn {
        Some(picks) => picks,
        None => {
            let (team, league) = params
                .team
                .zip(league.as_ref())
                .ok_or(DraftError::MissingTurnInfo)?;
            turn_from_league(league, team, params.current_pick)?
        }
    };

    let sigma = params
        .sigma
        .or_else(|| league.as_ref().map(|l| l.sigma))
        .unwrap_or_default();
    sigma.validate()?;
    let discount = league
        .as_ref()
        .map(|l| l.availability_discount)
        .unwrap_or(DEFAULT_AVAILABILITY_DISCOUNT);

    let window = DraftWindow::new(params.current_pick, picks_until_turn);
    debug!(
        players = pool.len(),
        current_pick = window.current_pick,
        picks_until_turn = window.picks_until_turn,
        "ranking player pool"
    );

    let order = if params.by_value {
        RankOrder::AdjustedValue
    } else {
        RankOrder::Availability
    };
    let mut ranked = rank_players(&pool, window, &sigma, discount, order);
    if let Some(limit) = params.limit {
        ranked.truncate(limit);
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?); // tarpaulin::skip
    } else {
        println!(
            "Pick {} with {} picks until your turn (target pick {})",
            window.current_pick,
            window.picks_until_turn,
            window.target_pick()
        );
        for (i, player) in ranked.iter().enumerate() {
            // tarpaulin::skip - console output
            let position = player
                .position
                .as_deref()
                .map(|p| format!(" ({})", p))
                .unwrap_or_default();
            let value = player
                .adjusted_value
                .map(|v| format!(" value {:.2}", v))
                .unwrap_or_default();
            println!(
                "{:>3}. {}{} ADP {:.1}: {:.1}% available{}",
                i + 1,
                player.name,
                position,
                player.adp,
                player.availability * 100.0,
                value,
            );
        }
    }

    Ok(ranked)
}
