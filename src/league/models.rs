//! League file and player pool structures.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::order::DraftOrder,
    core::{
        availability::{SigmaModel, DEFAULT_AVAILABILITY_DISCOUNT},
        board::DraftBoard,
        snake::{KeeperEntry, PickTrade},
    },
    error::{DraftError, Result},
};

pub const DEFAULT_NUM_ROUNDS: u32 = 25;

fn default_num_rounds() -> u32 {
    DEFAULT_NUM_ROUNDS
}

fn default_availability_discount() -> f64 {
    DEFAULT_AVAILABILITY_DISCOUNT
}

/// League settings read from `league.json`.
///
/// ```json
/// {
///   "draft_order": [2, 5, 9, 8, 3, 10, 4, 6, 1, 7],
///   "num_rounds": 25,
///   "keepers": [{ "team": 2, "round": 4, "player": "Bobby Witt Jr." }],
///   "trades": [{ "from": 9, "to": 2, "round": 4 }],
///   "sigma": { "mode": "fixed", "sigma": 18.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueConfig {
    pub draft_order: DraftOrder,
    #[serde(default = "default_num_rounds")]
    pub num_rounds: u32,
    #[serde(default)]
    pub keepers: Vec<KeeperEntry>,
    #[serde(default)]
    pub trades: Vec<PickTrade>,
    #[serde(default)]
    pub sigma: SigmaModel,
    #[serde(default = "default_availability_discount")]
    pub availability_discount: f64,
}

impl LeagueConfig {
    pub fn new(draft_order: DraftOrder) -> Self {
        Self {
            draft_order,
            num_rounds: DEFAULT_NUM_ROUNDS,
            keepers: Vec::new(),
            trades: Vec::new(),
            sigma: SigmaModel::default(),
            availability_discount: DEFAULT_AVAILABILITY_DISCOUNT,
        }
    }

    /// Check the settings the draft order type can't enforce on its own.
    pub fn validate(&self) -> Result<()> {
        if self.num_rounds == 0 {
            return Err(DraftError::InvalidRound { round: 0 });
        }
        self.sigma.validate()
    }

    pub fn board(&self) -> DraftBoard {
        DraftBoard::build(
            self.draft_order.teams(),
            self.num_rounds,
            &self.keepers,
            &self.trades,
        )
    }
}

/// One entry of a player pool file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolPlayer {
    pub name: String,
    pub adp: f64,
    /// Caller's own draft value, used for the availability-discounted score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}
