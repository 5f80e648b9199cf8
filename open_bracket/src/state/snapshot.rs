//! The tournament snapshot and its configuration sections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ordered::OrderedMap;
use crate::bracket::MatchBracket;
use crate::team::TeamRegistry;

/// Tournament-wide policy knobs. Read-only between reloads.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Maximum team size. `Some(1)` selects 1v1 mode, `None` is
    /// unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size_limit: Option<u32>,
    /// Pad displayed team lists up to this many slots with "TBA".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_size_minimum: Option<usize>,
    /// Display label for the round in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_round: Option<String>,
}

/// Chat-facing bot settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct BotConfig {
    /// Nick the transport should connect with.
    pub nick: String,
    /// Curt reply voice.
    pub sassy: bool,
    /// Nicks allowed to use admin commands and to confirm any result.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub admins: BTreeSet<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            nick: "bracketbot".to_string(),
            sassy: false,
            admins: BTreeSet::new(),
        }
    }
}

/// Complete in-memory tournament state, persisted as one JSON document.
///
/// The engine owns exactly one snapshot and is its only mutator.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Snapshot {
    pub tournament: TournamentConfig,
    pub bot: BotConfig,
    pub teams: TeamRegistry,
    pub matches: MatchBracket,
    /// Provisional claims: match id to claimed winning team. Entries
    /// exist only while the match is open.
    pub unconfirmed_results: OrderedMap<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
    /// Command names disabled for this tournament instance.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub excluded_commands: BTreeSet<String>,
}

impl Snapshot {
    /// True when the tournament registers one player per team.
    pub fn is_solo(&self) -> bool {
        self.tournament.team_size_limit == Some(1)
    }

    /// Set-membership test against the configured admin nicks.
    pub fn is_admin(&self, nick: &str) -> bool {
        self.bot.admins.contains(nick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = Snapshot::default();
        assert!(snapshot.teams.is_empty());
        assert!(snapshot.matches.is_empty());
        assert!(snapshot.unconfirmed_results.is_empty());
        assert!(!snapshot.is_solo());
        assert_eq!(snapshot.bot.nick, "bracketbot");
    }

    #[test]
    fn test_empty_optional_sections_are_omitted_on_save() {
        let raw = serde_json::to_string(&Snapshot::default()).unwrap();
        assert!(!raw.contains("rules"));
        assert!(!raw.contains("excluded_commands"));
        assert!(!raw.contains("admins"));
        assert!(!raw.contains("team_size_limit"));
    }

    #[test]
    fn test_solo_mode_requires_limit_of_one() {
        let mut snapshot = Snapshot::default();
        snapshot.tournament.team_size_limit = Some(4);
        assert!(!snapshot.is_solo());
        snapshot.tournament.team_size_limit = Some(1);
        assert!(snapshot.is_solo());
    }

    #[test]
    fn test_is_admin_uses_exact_nick() {
        let mut snapshot = Snapshot::default();
        snapshot.bot.admins.insert("ops".to_string());
        assert!(snapshot.is_admin("ops"));
        assert!(!snapshot.is_admin("Ops"));
    }
}
