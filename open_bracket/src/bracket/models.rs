//! Match records.

use serde::{Deserialize, Serialize};

/// A bracket slot: the teams meeting, when, and where the winner goes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    /// Unique id, also the display name.
    pub id: String,
    /// Id of the match the winner advances into; `None` for the final.
    #[serde(default)]
    pub next: Option<String>,
    /// Set exactly once, when the match closes.
    #[serde(default)]
    pub winner: Option<String>,
    /// Team names slotted in so far. Prior matches append their winners
    /// here as they close.
    #[serde(default)]
    pub teams: Vec<String>,
    /// Scheduled start in `%Y-%m-%d %H:%M:%S` form; ordering and display
    /// only.
    #[serde(default)]
    pub time: Option<String>,
}

impl Match {
    /// A match is open until a winner is fixed.
    pub fn is_open(&self) -> bool {
        self.winner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let m: Match = serde_json::from_str(r#"{"id":"Final"}"#).unwrap();
        assert_eq!(m.id, "Final");
        assert!(m.next.is_none());
        assert!(m.winner.is_none());
        assert!(m.teams.is_empty());
        assert!(m.time.is_none());
        assert!(m.is_open());
    }
}
