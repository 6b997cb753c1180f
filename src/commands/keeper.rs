//! Keeper command implementation

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    cli::types::order::DraftOrder,
    core::snake::{keeper_pick_or_sentinel, round_for_pick, UNRESOLVED_PICK},
    Result, TeamId,
};

use super::load_league;

/// Parameters for the keeper command
#[derive(Debug, Clone)]
pub struct KeeperParams {
    pub team: TeamId,
    pub round: u32,
    /// Round-1 order; read from the league file when absent.
    pub order: Option<DraftOrder>,
    pub league: Option<PathBuf>,
    pub as_json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct KeeperReport {
    team: TeamId,
    round: u32,
    pick_index: i64,
    resolved: bool,
}

/// Handle the keeper command. Returns the pick index or [`UNRESOLVED_PICK`].
pub fn handle_keeper(params: KeeperParams) -> Result<i64> {
    let order = match params.order {
        Some(order) => order,
        None => load_league(params.league)?.draft_order,
    };

    let pick_index = keeper_pick_or_sentinel(params.team, params.round, order.teams());

    if params.as_json {
        let report = KeeperReport {
            team: params.team,
            round: params.round,
            pick_index,
            resolved: pick_index != UNRESOLVED_PICK,
        };
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else if pick_index == UNRESOLVED_PICK {
        println!(
            "Team {} round {} keeper: unresolved ({})",
            params.team, params.round, UNRESOLVED_PICK
        );
    } else {
        let index = pick_index as usize;
        let num_teams = order.num_teams();
        println!(
            "Team {} round {} keeper: pick {} (round {}, slot {})",
            params.team,
            params.round,
            pick_index,
            round_for_pick(index, num_teams).unwrap_or(params.round),
            index % num_teams + 1,
        );
    }

    Ok(pick_index)
}
