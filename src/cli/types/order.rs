//! Round-1 draft order.

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::ids::TeamId;

/// Validated round-1 pick order: non-empty, every team exactly once.
///
/// The resolver functions in [`crate::core::snake`] accept any `&[TeamId]`
/// and treat a bad order as unresolvable; this type is how configuration
/// and CLI input get checked up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TeamId>", into = "Vec<TeamId>")]
pub struct DraftOrder(Vec<TeamId>);

impl DraftOrder {
    pub fn new(teams: Vec<TeamId>) -> Result<Self> {
        if teams.is_empty() {
            return Err(DraftError::EmptyDraftOrder);
        }
        let mut seen = HashSet::with_capacity(teams.len());
        for team in &teams {
            if !seen.insert(*team) {
                return Err(DraftError::DuplicateTeam {
                    team: team.as_u32(),
                });
            }
        }
        Ok(Self(teams))
    }

    pub fn teams(&self) -> &[TeamId] {
        &self.0
    }

    pub fn num_teams(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, team: TeamId) -> bool {
        self.0.contains(&team)
    }
}

impl AsRef<[TeamId]> for DraftOrder {
    fn as_ref(&self) -> &[TeamId] {
        &self.0
    }
}

impl TryFrom<Vec<TeamId>> for DraftOrder {
    type Error = DraftError;

    fn try_from(teams: Vec<TeamId>) -> Result<Self> {
        Self::new(teams)
    }
}

impl From<DraftOrder> for Vec<TeamId> {
    fn from(order: DraftOrder) -> Self {
        order.0
    }
}

impl fmt::Display for DraftOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Parses a comma-separated list such as `2,5,9,8`.
impl FromStr for DraftOrder {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        let teams = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(TeamId::from_str)
            .collect::<Result<Vec<_>>>()?;
        Self::new(teams)
    }
}
