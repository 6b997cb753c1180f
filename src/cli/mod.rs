//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{ids::TeamId, order::DraftOrder};

use crate::{
    core::availability::SigmaModel,
    error::{DraftError, Result},
};

/// Dispersion options shared between commands
#[derive(Debug, Args)]
pub struct SigmaArgs {
    /// Standard deviation of actual pick around ADP, in picks.
    #[clap(long, conflicts_with = "variable_sigma")]
    pub sigma: Option<f64>,

    /// Use sigma = 10 + 0.1 * ADP instead of a fixed value.
    #[clap(long)]
    pub variable_sigma: bool,
}

impl SigmaArgs {
    /// Sigma model from the flags, or `None` if neither was given.
    pub fn to_model(&self) -> Result<Option<SigmaModel>> {
        let model = match (self.sigma, self.variable_sigma) {
            (Some(sigma), _) => Some(SigmaModel::fixed(sigma)),
            (None, true) => Some(SigmaModel::variable()),
            (None, false) => None,
        };
        if let Some(model) = &model {
            model.validate()?;
        }
        Ok(model)
    }
}

/// League file option shared between commands
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League file (or set `DRAFT_ASSIST_LEAGUE_FILE`).
    #[clap(long)]
    pub league: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(
    name = "draft-assist",
    about = "Fantasy baseball draft availability and keeper placement"
)]
pub struct DraftAssist {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Chance a player is still undrafted when your turn comes.
    Availability {
        /// Player's average draft position.
        #[clap(long)]
        adp: f64,

        /// Overall pick currently on the clock (0-based).
        #[clap(long)]
        current_pick: u32,

        /// Picks other teams make before you select.
        #[clap(long, default_value_t = 0)]
        picks_until_turn: u32,

        #[clap(flatten)]
        sigma: SigmaArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Absolute pick index a keeper occupies.
    ///
    /// Prints -1 when the team is not in the draft order.
    Keeper {
        /// Team keeping the player.
        #[clap(long, short)]
        team: TeamId,

        /// Round the keeper costs (1-based).
        #[clap(long, short)]
        round: u32,

        /// Round-1 draft order, e.g. `2,5,9,8`. Read from the league file if omitted.
        #[clap(long)]
        order: Option<DraftOrder>,

        #[clap(flatten)]
        league: LeagueArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the draft board with trades and keepers applied.
    Board {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rank a player pool by availability at your next pick.
    Rank {
        /// Player pool JSON file.
        #[clap(long, short)]
        players: PathBuf,

        #[clap(flatten)]
        league: LeagueArgs,

        /// Your team; with a league file this works out picks until your turn.
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Overall pick currently on the clock (0-based board index, keeper slots included).
        #[clap(long)]
        current_pick: u32,

        /// Picks other teams make before you select.
        #[clap(long)]
        picks_until_turn: Option<u32>,

        #[clap(flatten)]
        sigma: SigmaArgs,

        /// Sort by availability-discounted value instead of availability.
        #[clap(long)]
        by_value: bool,

        /// Show only the first N players.
        #[clap(long, short = 'n')]
        limit: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

impl TryFrom<&SigmaArgs> for SigmaModel {
    type Error = DraftError;

    /// Flags if given, otherwise the fixed default.
    fn try_from(args: &SigmaArgs) -> Result<Self> {
        Ok(args.to_model()?.unwrap_or_default())
    }
}
