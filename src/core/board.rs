//! Pre-filled draft board.
//!
//! Lays out every pick of a snake draft, hands traded picks to their new
//! owners, and marks the picks keepers occupy so only live picks remain
//! open for the draft itself.

use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::types::ids::TeamId;

use super::snake::{
    pick_owner, resolve_keepers, resolve_pick_trades, round_for_pick, KeeperEntry,
    KeeperResolution, PickTrade,
};


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotKind {
    /// Still to be drafted.
    Open,
    /// Used by a kept player.
    Keeper {
        #[serde(skip_serializing_if = "Option::is_none")]
        player: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSlot {
    pub pick_index: usize,
    /// 1-based.
    pub round: u32,
    pub owner: TeamId,
    /// Owner before any trade.
    pub original_owner: TeamId,
    pub kind: SlotKind,
}

impl BoardSlot {
    pub fn is_open(&self) -> bool {
        self.kind == SlotKind::Open
    }

    pub fn is_traded(&self) -> bool {
        self.owner != self.original_owner
    }
}

/// Every pick of a draft with trades and keepers applied.
#[derive(Debug, Clone, Serialize)]
pub struct DraftBoard {
    draft_order: Vec<TeamId>,
    num_rounds: u32,
    slots: Vec<BoardSlot>,
    skipped_keepers: Vec<KeeperEntry>,
    skipped_trades: Vec<PickTrade>,
}

impl DraftBoard {
    /// Build the board. Keepers and trades that don't fit the order or the
    /// number of rounds are logged and kept in the skipped lists.
    ///
    /// A keeper sits on its team's own pick in the keeper's round. If that
    /// pick was traded away the keeper takes a pick the team acquired in the
    /// same round instead, when there is one.
    pub fn build(
        draft_order: &[TeamId],
        num_rounds: u32,
        keepers: &[KeeperEntry],
        trades: &[PickTrade],
    ) -> Self {
        let num_teams = draft_order.len();
        let total_picks = num_rounds as usize * num_teams;

        let mut slots: Vec<BoardSlot> = (0..total_picks)
            .filter_map(|pick_index| {
                let owner = pick_owner(pick_index, draft_order)?;
                Some(BoardSlot {
                    pick_index,
                    round: round_for_pick(pick_index, num_teams)?,
                    owner,
                    original_owner: owner,
                    kind: SlotKind::Open,
                })
            })
            .collect();

        let mut skipped_trades = Vec::new();
        for resolution in resolve_pick_trades(trades, draft_order) {
            let trade = resolution.trade;
            match resolution.pick_index.and_then(|index| slots.get_mut(index)) {
                Some(slot) => {
                    debug!(pick_index = slot.pick_index, from = %trade.from, to = %trade.to, "applying pick trade");
                    slot.owner = trade.to;
                }
                None => {
                    if resolution.is_resolved() {
                        warn!(from = %trade.from, to = %trade.to, round = trade.round, "skipping pick trade past the last round");
                    }
                    skipped_trades.push(trade);
                }
            }
        }

        let mut skipped_keepers = Vec::new();
        for resolution in resolve_keepers(keepers, draft_order) {
            match keeper_slot(&slots, &resolution) {
                Some(index) => {
                    slots[index].kind = SlotKind::Keeper {
                        player: resolution.keeper.player.clone(),
                    };
                }
                None => {
                    let keeper = resolution.keeper;
                    if resolution.pick_index.is_some() {
                        warn!(
                            team = %keeper.team,
                            round = keeper.round,
                            player = keeper.player.as_deref().unwrap_or(""),
                            "skipping keeper with no open pick"
                        );
                    }
                    skipped_keepers.push(keeper);
                }
            }
        }

        Self {
            draft_order: draft_order.to_vec(),
            num_rounds,
            slots,
            skipped_keepers,
            skipped_trades,
        }
    }

    pub fn draft_order(&self) -> &[TeamId] {
        &self.draft_order
    }

    pub fn num_teams(&self) -> usize {
        self.draft_order.len()
    }

    pub fn num_rounds(&self) -> u32 {
        self.num_rounds
    }

    pub fn slots(&self) -> &[BoardSlot] {
        &self.slots
    }

    /// Slots of a 1-based round in pick order.
    pub fn round(&self, round: u32) -> &[BoardSlot] {
        if round == 0 || round > self.num_rounds {
            return &[];
        }
        let n = self.num_teams();
        let start = (round as usize - 1) * n;
        &self.slots[start..start + n]
    }

    pub fn skipped_keepers(&self) -> &[KeeperEntry] {
        &self.skipped_keepers
    }

    pub fn skipped_trades(&self) -> &[PickTrade] {
        &self.skipped_trades
    }

    pub fn keeper_slots(&self) -> impl Iterator<Item = &BoardSlot> {
        self.slots.iter().filter(|slot| !slot.is_open())
    }

    /// Picks still to be made live, in draft order.
    pub fn open_picks(&self) -> impl Iterator<Item = &BoardSlot> {
        self.slots.iter().filter(|slot| slot.is_open())
    }

    /// First open pick owned by `team` at or after `on_the_clock`.
    pub fn next_pick_for(&self, team: TeamId, on_the_clock: usize) -> Option<&BoardSlot> {
        self.slots
            .iter()
            .skip(on_the_clock)
            .find(|slot| slot.is_open() && slot.owner == team)
    }

    /// Board positions between `on_the_clock` and `team`'s next open pick,
    /// keeper slots included, so `on_the_clock + count` is that pick's index.
    pub fn picks_until_turn(&self, team: TeamId, on_the_clock: usize) -> Option<u32> {
        let next = self.next_pick_for(team, on_the_clock)?;
        u32::try_from(next.pick_index - on_the_clock).ok()
    }

    /// Position of an open pick among live picks only (0-based).
    pub fn live_pick_number(&self, pick_index: usize) -> Option<usize> {
        let slot = self.slots.get(pick_index)?;
        if !slot.is_open() {
            return None;
        }
        Some(self.slots[..pick_index].iter().filter(|s| s.is_open()).count())
    }
}

fn keeper_slot(slots: &[BoardSlot], resolution: &KeeperResolution) -> Option<usize> {
    let keeper = &resolution.keeper;
    let base_slot = slots.get(resolution.pick_index?)?;
    if base_slot.is_open() && base_slot.owner == keeper.team {
        return Some(base_slot.pick_index);
    }

    slots
        .iter()
        .filter(|slot| slot.round == keeper.round)
        .find(|slot| slot.is_open() && slot.owner == keeper.team)
        .map(|slot| slot.pick_index)
}
