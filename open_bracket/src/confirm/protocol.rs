//! The result-confirmation state machine.
//!
//! A match result becomes authoritative the moment it is reported by
//! someone in a position to attest against their own team's interest: a
//! member of a losing team, or an admin. Any other reporter's claim is
//! recorded as unconfirmed and the match stays open.

use log::{info, warn};
use thiserror::Error;

use crate::state::Snapshot;

/// Report validation failures. Display strings are relayed to the
/// reporter verbatim. None of these mutate the snapshot.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ReportError {
    #[error("Expected: <command> <match-id> <winning-team-name>")]
    BadArguments,

    #[error("Unable to find match {0}")]
    UnknownMatch(String),

    #[error("Unable to find team {0}")]
    UnknownTeam(String),

    #[error("Match {0} is already closed")]
    MatchAlreadyClosed(String),
}

/// What a valid report did to the match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportOutcome {
    /// The reporter could finalize; the match closed with this winner.
    Closed { match_id: String, winner: String },
    /// Claim recorded, match still open. This still mutated the
    /// unconfirmed-results table.
    Unconfirmed { match_id: String, winner: String },
}

/// Apply a reported result to the snapshot.
///
/// The claim is written before authorization is checked, unconditionally
/// overwriting any earlier claim for the match, so an unauthorized report
/// still mutates the unconfirmed-results table. Kept for compatibility
/// with the observed protocol even though it lets a rejected claim erase
/// a legitimate pending one.
pub fn report(
    state: &mut Snapshot,
    reporter_nick: &str,
    is_admin: bool,
    args: &[String],
) -> Result<ReportOutcome, ReportError> {
    let [match_id, winner] = args else {
        return Err(ReportError::BadArguments);
    };

    let m = state
        .matches
        .lookup(match_id)
        .ok_or_else(|| ReportError::UnknownMatch(match_id.clone()))?;
    if !m.is_open() {
        return Err(ReportError::MatchAlreadyClosed(match_id.clone()));
    }
    if state.teams.lookup(winner).is_none() {
        return Err(ReportError::UnknownTeam(winner.clone()));
    }

    state
        .unconfirmed_results
        .insert(match_id.clone(), winner.clone());

    let authorized = is_admin || is_losing_member(state, match_id, winner, reporter_nick);
    if !authorized {
        info!("{reporter_nick} claimed {winner} won {match_id}; awaiting confirmation");
        return Ok(ReportOutcome::Unconfirmed {
            match_id: match_id.clone(),
            winner: winner.clone(),
        });
    }

    close_match(state, match_id, winner);
    Ok(ReportOutcome::Closed {
        match_id: match_id.clone(),
        winner: winner.clone(),
    })
}

/// Whether `nick` belongs to a team in the match other than the claimed
/// winner. Computed fresh from the match's team list; the winning team is
/// excluded by name equality.
fn is_losing_member(state: &Snapshot, match_id: &str, winner: &str, nick: &str) -> bool {
    let Some(m) = state.matches.lookup(match_id) else {
        return false;
    };
    m.teams
        .iter()
        .filter(|name| name.as_str() != winner)
        .filter_map(|name| state.teams.lookup(name))
        .any(|team| team.members.iter().any(|member| member == nick))
}

/// Close a match: fix the winner, bump counters for every involved team,
/// advance the winner into the next match, and drop any unconfirmed claim
/// for this match.
pub fn close_match(state: &mut Snapshot, match_id: &str, winner: &str) {
    let losers: Vec<String> = {
        let Some(m) = state.matches.lookup_mut(match_id) else {
            warn!("cannot close unknown match {match_id}");
            return;
        };
        m.winner = Some(winner.to_string());
        m.teams
            .iter()
            .filter(|name| name.as_str() != winner)
            .cloned()
            .collect()
    };

    for name in &losers {
        match state.teams.lookup_mut(name) {
            Some(team) => {
                team.games += 1;
                team.losses += 1;
                team.attended += 1;
            }
            None => warn!("match {match_id} lists unknown team {name}"),
        }
    }
    match state.teams.lookup_mut(winner) {
        Some(team) => {
            team.games += 1;
            team.wins += 1;
            team.attended += 1;
        }
        None => warn!("match {match_id} closed with unknown team {winner}"),
    }

    state.matches.advance(match_id, winner);
    state.unconfirmed_results.remove(match_id);
    info!("match {match_id} closed, won by {winner}");
}
