//! Team registration and lookup.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::Team;
use crate::state::OrderedMap;

/// Registration failures. Display strings are relayed to the reporter
/// verbatim.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum RegisterError {
    #[error("{0}")]
    BadArguments(String),

    #[error("Team {name} already registered by {creator}! Current members: {}", .members.join(","))]
    AlreadyRegistered {
        name: String,
        creator: String,
        members: Vec<String>,
    },
}

/// Outcome of a successful registration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registration {
    pub name: String,
    pub members: Vec<String>,
}

/// Registered teams, in registration order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TeamRegistry {
    teams: OrderedMap<Team>,
}

impl TeamRegistry {
    /// Register a team on behalf of `player`.
    ///
    /// With a team size limit of 1 the team name is the player's own nick
    /// and no arguments are accepted; otherwise `args[0]` names the team
    /// and the rest are its members (free-form, not validated against
    /// known players). An existing team name is reported, never touched.
    pub fn register(
        &mut self,
        player: &str,
        args: &[String],
        team_size_limit: Option<u32>,
    ) -> Result<Registration, RegisterError> {
        let (name, members) = if team_size_limit == Some(1) {
            if !args.is_empty() {
                return Err(RegisterError::BadArguments(
                    "Expected no arguments (1v1 tournament)".to_string(),
                ));
            }
            (player.to_string(), vec![player.to_string()])
        } else {
            if args.is_empty() {
                return Err(RegisterError::BadArguments(
                    "Expected <teamname> <member> [member [... member]] (multiplayer tournament)"
                        .to_string(),
                ));
            }
            (args[0].clone(), args[1..].to_vec())
        };

        if let Some(existing) = self.teams.get(&name) {
            return Err(RegisterError::AlreadyRegistered {
                name,
                creator: existing.creator.clone(),
                members: existing.members.clone(),
            });
        }

        self.create_team(name.clone(), members.clone(), player);
        Ok(Registration { name, members })
    }

    /// Unconditional insert used by bracket-setup tooling. Overwrites
    /// silently, counters zeroed.
    pub fn create_team(
        &mut self,
        name: impl Into<String>,
        members: Vec<String>,
        creator: impl Into<String>,
    ) {
        let name = name.into();
        debug!("creating team {name}");
        self.teams.insert(name, Team::new(members, creator));
    }

    pub fn lookup(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.teams.get_mut(name)
    }

    /// Team names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.teams.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Team)> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
