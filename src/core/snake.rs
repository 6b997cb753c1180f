//! Snake-draft pick arithmetic.
//!
//! Round 1 follows the league's draft order, round 2 runs it backwards,
//! round 3 forwards again, and so on. Every pick in the draft has an
//! absolute 0-based index `round0 * num_teams + position_in_round`.
//!
//! Functions here take the draft order as a plain slice and never fail:
//! an empty order, an unknown team, or round 0 all come back as `None` so a
//! batch of keepers or trades can be resolved without one bad row stopping
//! the rest.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::types::ids::TeamId;


/// Sentinel for a keeper that cannot be placed on the board.
pub const UNRESOLVED_PICK: i64 = -1;

/// Which way the draft order runs in a given round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundDirection {
    /// Same order as round 1.
    Forward,
    /// Round 1 order reversed.
    Reverse,
}

impl RoundDirection {
    /// Direction for a 0-based round number.
    pub fn for_round(round0: u32) -> Self {
        if round0 % 2 == 0 {
            RoundDirection::Forward
        } else {
            RoundDirection::Reverse
        }
    }

    /// Map an index into the round-1 order to a slot within the round.
    ///
    /// The mapping is its own inverse, so it also maps a slot back to the
    /// round-1 index of the team that owns it. `order_index` must be less
    /// than `num_teams`.
    pub fn position_in_round(self, order_index: usize, num_teams: usize) -> usize {
        match self {
            RoundDirection::Forward => order_index,
            RoundDirection::Reverse => num_teams - 1 - order_index,
        }
    }
}

/// Absolute pick index a team owns in a round before any trades or keepers.
///
/// `round` is 1-based.
pub fn snake_pick_index(team: TeamId, round: u32, draft_order: &[TeamId]) -> Option<usize> {
    let round0 = round.checked_sub(1)?;
    let order_index = draft_order.iter().position(|t| *t == team)?;
    let num_teams = draft_order.len();
    let position = RoundDirection::for_round(round0).position_in_round(order_index, num_teams);
    Some(round0 as usize * num_teams + position)
}

/// Pick index occupied by a keeper that costs `round_cost` (1-based).
///
/// # Examples
///
/// ```rust
/// use draft_assist::core::snake::resolve_keeper_pick;
/// use draft_assist::TeamId;
///
/// let order: Vec<TeamId> = [1, 2, 3, 4].into_iter().map(TeamId::new).collect();
/// assert_eq!(resolve_keeper_pick(TeamId::new(4), 2, &order), Some(4));
/// assert_eq!(resolve_keeper_pick(TeamId::new(9), 1, &order), None);
/// ```
pub fn resolve_keeper_pick(team: TeamId, round_cost: u32, draft_order: &[TeamId]) -> Option<usize> {
    snake_pick_index(team, round_cost, draft_order)
}

/// [`resolve_keeper_pick`] with [`UNRESOLVED_PICK`] in place of `None`.
pub fn keeper_pick_or_sentinel(team: TeamId, round_cost: u32, draft_order: &[TeamId]) -> i64 {
    resolve_keeper_pick(team, round_cost, draft_order)
        .and_then(|index| i64::try_from(index).ok())
        .unwrap_or(UNRESOLVED_PICK)
}

/// 1-based round containing an absolute pick index.
pub fn round_for_pick(pick_index: usize, num_teams: usize) -> Option<u32> {
    if num_teams == 0 {
        return None;
    }
    u32::try_from(pick_index / num_teams + 1).ok()
}

/// Team that owns a pick in the base snake schedule.
pub fn pick_owner(pick_index: usize, draft_order: &[TeamId]) -> Option<TeamId> {
    let num_teams = draft_order.len();
    if num_teams == 0 {
        return None;
    }
    let round0 = u32::try_from(pick_index / num_teams).ok()?;
    let position = pick_index % num_teams;
    let order_index = RoundDirection::for_round(round0).position_in_round(position, num_teams);
    draft_order.get(order_index).copied()
}

/// A player a team retains, charged against one of its round picks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeeperEntry {
    pub team: TeamId,
    /// 1-based round the keeper costs.
    pub round: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

impl KeeperEntry {
    pub fn new(team: TeamId, round: u32) -> Self {
        Self {
            team,
            round,
            player: None,
        }
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }
}

/// Outcome of placing one keeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeeperResolution {
    pub keeper: KeeperEntry,
    pub pick_index: Option<usize>,
}

impl KeeperResolution {
    pub fn is_resolved(&self) -> bool {
        self.pick_index.is_some()
    }
}

/// Resolve every keeper, keeping input order. Bad rows are logged and
/// reported with `pick_index: None`.
pub fn resolve_keepers(keepers: &[KeeperEntry], draft_order: &[TeamId]) -> Vec<KeeperResolution> {
    keepers
        .iter()
        .map(|keeper| {
            let pick_index = resolve_keeper_pick(keeper.team, keeper.round, draft_order);
            if pick_index.is_none() {
                warn!(
                    team = keeper.team.as_u32(),
                    round = keeper.round,
                    player = keeper.player.as_deref().unwrap_or(""),
                    "keeper could not be placed in the draft order"
                );
            }
            KeeperResolution {
                keeper: keeper.clone(),
                pick_index,
            }
        })
        .collect()
}

/// A round pick that changed hands before the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickTrade {
    /// Team whose original pick is traded.
    pub from: TeamId,
    pub to: TeamId,
    /// 1-based round of the traded pick.
    pub round: u32,
}

/// Outcome of placing one pick trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeResolution {
    pub trade: PickTrade,
    pub pick_index: Option<usize>,
}

impl TradeResolution {
    pub fn is_resolved(&self) -> bool {
        self.pick_index.is_some()
    }
}

/// Pin trades to the picks they move, keeping input order. Trades naming a
/// team outside the order or round 0 are logged and reported with
/// `pick_index: None`.
pub fn resolve_pick_trades(trades: &[PickTrade], draft_order: &[TeamId]) -> Vec<TradeResolution> {
    trades
        .iter()
        .map(|trade| {
            let pick_index = snake_pick_index(trade.from, trade.round, draft_order)
                .filter(|_| draft_order.contains(&trade.to));
            if pick_index.is_none() {
                warn!(
                    from = trade.from.as_u32(),
                    to = trade.to.as_u32(),
                    round = trade.round,
                    "pick trade could not be placed in the draft order"
                );
            }
            TradeResolution {
                trade: *trade,
                pick_index,
            }
        })
        .collect()
}
