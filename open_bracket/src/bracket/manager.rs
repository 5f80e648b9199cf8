//! The match bracket: insertion, lookup, display ordering, and winner
//! advancement.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use super::models::Match;
use crate::state::OrderedMap;
use crate::timing;

/// Matches keyed by id, in creation order.
///
/// Topology is caller-supplied and trusted: no uniqueness or
/// reachability validation happens here.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchBracket {
    matches: OrderedMap<Match>,
}

impl MatchBracket {
    /// Insert or replace the match record at `id`.
    pub fn add_match(
        &mut self,
        id: impl Into<String>,
        time: Option<String>,
        teams: Vec<String>,
        next: Option<String>,
        winner: Option<String>,
    ) {
        let id = id.into();
        self.matches.insert(
            id.clone(),
            Match {
                id,
                next,
                winner,
                teams,
                time,
            },
        );
    }

    pub fn lookup(&self, id: &str) -> Option<&Match> {
        self.matches.get(id)
    }

    pub(crate) fn lookup_mut(&mut self, id: &str) -> Option<&mut Match> {
        self.matches.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Match)> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Open matches in display order: scheduled time ascending, matches
    /// without a parseable time after all timed ones, id as the
    /// tie-break. The key is total, so the order is deterministic.
    pub fn remaining(&self) -> Vec<&Match> {
        let mut open: Vec<&Match> = self.matches.values().filter(|m| m.is_open()).collect();
        open.sort_by_key(|m| (sort_instant(m), m.id.clone()));
        open
    }

    /// Append `winner` to the team list of the match that `id` advances
    /// into, if any. Capacity is not validated; display-time padding and
    /// truncation deal with overfull slots.
    pub fn advance(&mut self, id: &str, winner: &str) {
        let Some(next_id) = self.matches.get(id).and_then(|m| m.next.clone()) else {
            return;
        };
        match self.matches.get_mut(&next_id) {
            Some(next) => next.teams.push(winner.to_string()),
            None => warn!("match {id} advances into unknown match {next_id}"),
        }
    }
}

fn sort_instant(m: &Match) -> DateTime<Utc> {
    match &m.time {
        Some(raw) => match timing::parse_time(raw) {
            Ok(instant) => instant,
            Err(err) => {
                warn!("match {} has unparseable time {raw:?}: {err}", m.id);
                DateTime::<Utc>::MAX_UTC
            }
        },
        None => DateTime::<Utc>::MAX_UTC,
    }
}
