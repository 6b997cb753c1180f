//! Fantasy Baseball Draft Assistant Library
//!
//! Draft-day helpers built on two small computations:
//!
//! - **Availability estimation**: the chance a player with a given ADP is
//!   still undrafted when your next pick comes around
//! - **Keeper placement**: the absolute pick a keeper occupies in a snake
//!   draft, given the round it costs and the round-1 order
//!
//! Around those sit a draft board that applies pick trades and keepers,
//! player pool ranking, and the league file the CLI reads.
//!
//! ## Quick Start
//!
//! ```rust
//! use draft_assist::core::{estimate_availability, resolve_keeper_pick, DEFAULT_SIGMA};
//! use draft_assist::TeamId;
//!
//! // Player with ADP 50, pick 40 on the clock, our turn is next
//! let p = estimate_availability(50.0, 40, 0, DEFAULT_SIGMA);
//! assert!(p > 0.5);
//!
//! // Team 4 keeps a player in round 2 of a 4-team snake draft
//! let order: Vec<TeamId> = (1..=4).map(TeamId::new).collect();
//! assert_eq!(resolve_keeper_pick(TeamId::new(4), 2, &order), Some(4));
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at your league file to avoid passing `--league` every time:
//! ```bash
//! export DRAFT_ASSIST_LEAGUE_FILE=~/leagues/2026.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod league;

// Re-export commonly used types
pub use cli::types::{ids::TeamId, order::DraftOrder};
pub use error::{DraftError, Result};
pub use league::{LeagueConfig, PoolPlayer};

pub const LEAGUE_FILE_ENV_VAR: &str = "DRAFT_ASSIST_LEAGUE_FILE";
