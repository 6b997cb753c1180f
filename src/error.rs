//! Error types for the draft assistant

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("League file not provided, {env_var} not set and no default at {default_path}")]
    MissingLeagueFile {
        env_var: String,
        default_path: String,
    },

    #[error("Draft order is empty")]
    EmptyDraftOrder,

    #[error("Team {team} appears more than once in the draft order")]
    DuplicateTeam { team: u32 },

    #[error("Team {team} is not in the draft order")]
    UnknownTeam { team: u32 },

    #[error("Team {team} has no remaining pick on the board")]
    NoRemainingPick { team: u32 },

    #[error("Invalid sigma: {value} (must be finite and > 0)")]
    InvalidSigma { value: f64 },

    #[error("Invalid round: {round} (rounds start at 1)")]
    InvalidRound { round: u32 },

    #[error("Either --picks-until-turn or --team with a league file is required")]
    MissingTurnInfo,
}
