//! Board command implementation

use std::path::PathBuf;

use crate::{
    core::board::{BoardSlot, DraftBoard, SlotKind},
    Result,
};

use super::load_league;

/// Handle the board command
pub fn handle_board(league: Option<PathBuf>, as_json: bool) -> Result<DraftBoard> {
    let config = load_league(league)?;
    let board = config.board();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&board)?); // tarpaulin::skip
        return Ok(board);
    }

    // tarpaulin::skip - console output
    println!(
        "{} teams, {} rounds, {} keepers, {} live picks",
        board.num_teams(),
        board.num_rounds(),
        board.keeper_slots().count(),
        board.open_picks().count(),
    );
    for round in 1..=board.num_rounds() {
        let cells: Vec<String> = board.round(round).iter().map(format_slot).collect();
        println!("Rd {:>2} | {}", round, cells.join(" | "));
    }
    for keeper in board.skipped_keepers() {
        println!(
            "Skipped keeper: team {} round {} {}",
            keeper.team,
            keeper.round,
            keeper.player.as_deref().unwrap_or("")
        );
    }
    for trade in board.skipped_trades() {
        println!(
            "Skipped trade: team {} -> team {} round {}",
            trade.from, trade.to, trade.round
        );
    }

    Ok(board)
}

/// `7`, `2<9` for a pick traded from 9 to 2, `K:4` for a keeper.
pub fn format_slot(slot: &BoardSlot) -> String {
    let owner = if slot.is_traded() {
        format!("{}<{}", slot.owner, slot.original_owner)
    } else {
        slot.owner.to_string()
    };
    match &slot.kind {
        SlotKind::Open => owner,
        SlotKind::Keeper { .. } => format!("K:{}", owner),
    }
}
