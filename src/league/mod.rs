//! League configuration for the draft assistant
//!
//! - `models`: league file and player pool structures
//! - `config`: locating and loading those files

pub mod config;
pub mod models;


pub use config::{default_league_path, load_league_config, load_player_pool, resolve_league_path};
pub use models::*;
