//! The tournament engine facade.
//!
//! Composes the team registry, match bracket, and confirmation protocol
//! behind the chat command surface, applies command-level authorization,
//! and is the sole mutator of the snapshot. Mutating commands trigger a
//! save through the persistence collaborator before their outcome is
//! reported.

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::collections::BTreeSet;

use crate::bracket::Match;
use crate::confirm::{self, ReportOutcome};
use crate::identity;
use crate::state::Snapshot;
use crate::store::SnapshotStore;
use crate::team::{RegisterError, Registration};
use crate::timing;

use super::commands::{CommandKind, Reply};
use super::errors::CommandError;

/// Team-list slots without a known team yet display as this placeholder.
const TBA: &str = "TBA";

pub struct TournamentEngine {
    state: Snapshot,
    store: Box<dyn SnapshotStore>,
    enabled: BTreeSet<CommandKind>,
    prefix: String,
}

impl TournamentEngine {
    /// Build an engine over an already-loaded snapshot.
    pub fn new(state: Snapshot, store: Box<dyn SnapshotStore>) -> Self {
        let enabled = CommandKind::enabled(&state.excluded_commands);
        Self {
            state,
            store,
            enabled,
            prefix: ".".to_string(),
        }
    }

    /// Load the snapshot through the store. A store that cannot produce
    /// one is reported and the engine starts from the empty default.
    pub fn from_store(store: Box<dyn SnapshotStore>) -> Self {
        let state = match store.load() {
            Ok(state) => state,
            Err(err) => {
                warn!("starting from empty records: {err}");
                Snapshot::default()
            }
        };
        Self::new(state, store)
    }

    /// Use a different command prefix in help output.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    pub fn bot_nick(&self) -> &str {
        &self.state.bot.nick
    }

    pub fn command_prefix(&self) -> &str {
        &self.prefix
    }

    /// Setup tooling: unconditional team insert, bypassing the
    /// registration arity policy.
    pub fn create_team(
        &mut self,
        name: impl Into<String>,
        members: Vec<String>,
        creator: impl Into<String>,
    ) {
        self.state.teams.create_team(name, members, creator);
    }

    /// Setup tooling: insert or replace a bracket slot.
    pub fn add_match(
        &mut self,
        id: impl Into<String>,
        time: Option<String>,
        teams: Vec<String>,
        next: Option<String>,
        winner: Option<String>,
    ) {
        self.state.matches.add_match(id, time, teams, next, winner);
    }

    /// Resolve a command name against the enabled set.
    pub fn command_for(&self, name: &str) -> Option<CommandKind> {
        CommandKind::from_name(name).filter(|kind| self.enabled.contains(kind))
    }

    pub fn enabled_commands(&self) -> impl Iterator<Item = CommandKind> + '_ {
        self.enabled.iter().copied()
    }

    /// Process one chat command and return the lines to relay.
    ///
    /// `now` is the caller's clock reading. Commands must arrive strictly
    /// one at a time; the actor wrapper enforces that.
    pub fn handle(
        &mut self,
        identity: &str,
        target: &str,
        name: &str,
        args: &[String],
        now: DateTime<Utc>,
    ) -> Reply {
        let Some(kind) = self.command_for(name) else {
            return Reply::msg(self.unknown_command_line());
        };
        let nick = identity::nickname(identity).to_string();
        info!("{nick} in {target}: {kind} {args:?}");

        let mut reply = match self.dispatch(kind, &nick, args, now) {
            Ok(reply) => reply,
            Err(err) => Reply::msg(err.to_string()),
        };
        if reply.mutated {
            if let Err(err) = self.store.save(&self.state) {
                error!("failed to save records: {err}");
                reply
                    .lines
                    .push(format!("Warning: failed to save records: {err}"));
            }
        }
        reply
    }

    fn dispatch(
        &mut self,
        kind: CommandKind,
        nick: &str,
        args: &[String],
        now: DateTime<Utc>,
    ) -> Result<Reply, CommandError> {
        match kind {
            CommandKind::Register => self.register(nick, args),
            CommandKind::AdminRegister => self.admin_register(nick, args),
            CommandKind::Result => self.report_result(nick, args),
            CommandKind::Remaining => Ok(self.remaining(now)),
            CommandKind::Teams => Ok(self.team_list()),
            CommandKind::Players => Ok(self.player_list()),
            CommandKind::Rules => Ok(self.rule_list()),
            CommandKind::Unconfirmed => Ok(self.unconfirmed_list()),
            CommandKind::Admins => Ok(self.admin_list()),
            CommandKind::Help => Ok(self.help()),
            CommandKind::Reload => self.reload(),
        }
    }

    fn register(&mut self, nick: &str, args: &[String]) -> Result<Reply, CommandError> {
        let limit = self.state.tournament.team_size_limit;
        let registration = self.state.teams.register(nick, args, limit)?;
        Ok(Reply::mutation(self.registered_line(&registration, nick)))
    }

    /// Admin-gated registration. In 1v1 mode the single argument names
    /// the player to register on their behalf; otherwise this is ordinary
    /// registration without the caller-is-the-new-team property.
    fn admin_register(&mut self, nick: &str, args: &[String]) -> Result<Reply, CommandError> {
        if !self.state.is_admin(nick) {
            return Err(CommandError::Unauthorized(
                "admin_register is for admins only".to_string(),
            ));
        }
        if self.state.is_solo() {
            let [player] = args else {
                return Err(RegisterError::BadArguments(
                    "Expected <player> (1v1 tournament)".to_string(),
                )
                .into());
            };
            let registration = self.state.teams.register(player, &[], Some(1))?;
            Ok(Reply::mutation(format!(
                "Team {} registered on behalf of {player}",
                registration.name
            )))
        } else {
            let limit = self.state.tournament.team_size_limit;
            let registration = self.state.teams.register(nick, args, limit)?;
            Ok(Reply::mutation(self.registered_line(&registration, nick)))
        }
    }

    fn report_result(&mut self, nick: &str, args: &[String]) -> Result<Reply, CommandError> {
        let is_admin = self.state.is_admin(nick);
        let outcome = confirm::report(&mut self.state, nick, is_admin, args)?;
        Ok(match outcome {
            ReportOutcome::Closed { match_id, winner } => {
                Reply::mutation(format!("{match_id} won by {winner}. Congratulations!"))
            }
            // The claim write is a mutation even though the match stayed
            // open.
            ReportOutcome::Unconfirmed { .. } => Reply {
                lines: vec![
                    "Result must be confirmed by an admin or a loser in the match".to_string(),
                ],
                mutated: true,
            },
        })
    }

    fn remaining(&self, now: DateTime<Utc>) -> Reply {
        let open = self.state.matches.remaining();
        if open.is_empty() {
            return Reply::msg("No remaining matches");
        }
        let mut lines = Vec::with_capacity(open.len() + 1);
        if let Some(round) = &self.state.tournament.current_round {
            lines.push(format!("Current round: {round}"));
        }
        for m in open {
            lines.push(self.match_line(m, now));
        }
        Reply::lines(lines)
    }

    fn match_line(&self, m: &Match, now: DateTime<Utc>) -> String {
        let minimum = self.state.tournament.match_size_minimum.unwrap_or(2);
        let mut slots: Vec<&str> = m.teams.iter().map(String::as_str).collect();
        while slots.len() < minimum {
            slots.push(TBA);
        }
        let teams = slots.join(" vs ");

        let when = match &m.time {
            Some(raw) => match timing::parse_time(raw) {
                Ok(instant) if instant > now => {
                    format!("{raw} (in {})", timing::format_duration(instant - now))
                }
                Ok(instant) => {
                    format!("{raw} (started {} ago)", timing::format_duration(now - instant))
                }
                Err(_) => raw.clone(),
            },
            None => "time TBA".to_string(),
        };
        format!("{}: {teams} - {when}", m.id)
    }

    fn team_list(&self) -> Reply {
        if self.state.teams.is_empty() {
            return Reply::msg("No teams registered");
        }
        let names: Vec<&str> = self.state.teams.names().collect();
        Reply::msg(format!("Teams: {}", names.join(", ")))
    }

    fn player_list(&self) -> Reply {
        let players: Vec<&str> = self
            .state
            .teams
            .iter()
            .flat_map(|(_, team)| team.members.iter().map(String::as_str))
            .collect();
        if players.is_empty() {
            return Reply::msg("No players registered");
        }
        Reply::msg(format!("Players: {}", players.join(", ")))
    }

    fn rule_list(&self) -> Reply {
        if self.state.rules.is_empty() {
            return Reply::msg("No rules configured");
        }
        Reply::lines(
            self.state
                .rules
                .iter()
                .enumerate()
                .map(|(i, rule)| format!("{}. {rule}", i + 1))
                .collect(),
        )
    }

    fn unconfirmed_list(&self) -> Reply {
        if self.state.unconfirmed_results.is_empty() {
            return Reply::msg("No unconfirmed results");
        }
        Reply::lines(
            self.state
                .unconfirmed_results
                .iter()
                .map(|(match_id, team)| format!("{match_id}: {team} (unconfirmed)"))
                .collect(),
        )
    }

    fn admin_list(&self) -> Reply {
        if self.state.bot.admins.is_empty() {
            return Reply::msg("No admins configured");
        }
        let admins: Vec<&str> = self.state.bot.admins.iter().map(String::as_str).collect();
        Reply::msg(format!("Admins: {}", admins.join(", ")))
    }

    fn help(&self) -> Reply {
        let names: Vec<String> = self
            .enabled
            .iter()
            .map(|kind| format!("{}{kind}", self.prefix))
            .collect();
        Reply::lines(vec![
            "Supported commands:".to_string(),
            format!("  {}", names.join(" ")),
        ])
    }

    /// Discard the in-memory snapshot and replace it from the store.
    fn reload(&mut self) -> Result<Reply, CommandError> {
        self.state = self.store.load()?;
        self.enabled = CommandKind::enabled(&self.state.excluded_commands);
        info!("records reloaded");
        Ok(Reply::msg("Records reloaded"))
    }

    fn registered_line(&self, registration: &Registration, creator: &str) -> String {
        let members = registration.members.join(", ");
        if self.state.bot.sassy {
            format!(
                "Team {} is in. Try not to embarrass yourselves.",
                registration.name
            )
        } else {
            format!(
                "Team {} successfully registered by {creator} with members {members}. \
                 Thanks for participating!",
                registration.name
            )
        }
    }

    fn unknown_command_line(&self) -> String {
        if self.state.bot.sassy {
            "Eh?".to_string()
        } else {
            format!("Unknown command. See {}help", self.prefix)
        }
    }
}
