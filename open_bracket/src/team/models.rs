//! Team records and lifetime counters.

use serde::{Deserialize, Serialize};

/// A registered team and its running record.
///
/// Counters only move when a match closes. Draws and forfeits are carried
/// in the record, but no modeled transition produces them.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Team {
    /// Player identifiers, in registration order.
    pub members: Vec<String>,
    /// Nick of the player that registered the team.
    pub creator: String,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub attended: u32,
    #[serde(default)]
    pub forfeited: u32,
}

impl Team {
    /// A fresh team with zeroed counters.
    pub fn new(members: Vec<String>, creator: impl Into<String>) -> Self {
        Self {
            members,
            creator: creator.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team_counters_are_zero() {
        let team = Team::new(vec!["A1".to_string()], "A1");
        assert_eq!(team.games, 0);
        assert_eq!(team.wins, 0);
        assert_eq!(team.losses, 0);
        assert_eq!(team.draws, 0);
        assert_eq!(team.attended, 0);
        assert_eq!(team.forfeited, 0);
    }

    #[test]
    fn test_deserialize_defaults_missing_counters() {
        let team: Team =
            serde_json::from_str(r#"{"members":["A1"],"creator":"A1","wins":3}"#).unwrap();
        assert_eq!(team.wins, 3);
        assert_eq!(team.games, 0);
    }
}
