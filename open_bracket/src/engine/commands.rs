//! Command surface: names, the enabled set, and reply payloads.

use std::collections::BTreeSet;
use std::fmt;

/// Every command the engine understands.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CommandKind {
    Register,
    AdminRegister,
    Result,
    Remaining,
    Teams,
    Players,
    Rules,
    Unconfirmed,
    Admins,
    Help,
    Reload,
}

impl CommandKind {
    /// The fixed total registry, in help-display order.
    pub const ALL: [CommandKind; 11] = [
        CommandKind::Register,
        CommandKind::AdminRegister,
        CommandKind::Result,
        CommandKind::Remaining,
        CommandKind::Teams,
        CommandKind::Players,
        CommandKind::Rules,
        CommandKind::Unconfirmed,
        CommandKind::Admins,
        CommandKind::Help,
        CommandKind::Reload,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::AdminRegister => "admin_register",
            Self::Result => "result",
            Self::Remaining => "remaining",
            Self::Teams => "teams",
            Self::Players => "players",
            Self::Rules => "rules",
            Self::Unconfirmed => "unconfirmed",
            Self::Admins => "admins",
            Self::Help => "help",
            Self::Reload => "reload",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// The active set for a tournament: the fixed registry minus the
    /// excluded names. Computed once per load or reload.
    pub fn enabled(excluded: &BTreeSet<String>) -> BTreeSet<CommandKind> {
        Self::ALL
            .iter()
            .copied()
            .filter(|kind| !excluded.contains(kind.name()))
            .collect()
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outbound text lines plus whether the command changed state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub mutated: bool,
}

impl Reply {
    /// A single informational line.
    pub fn msg(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            mutated: false,
        }
    }

    /// A single line acknowledging a state change.
    pub fn mutation(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            mutated: true,
        }
    }

    /// Several informational lines.
    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            mutated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(CommandKind::from_name("dance"), None);
    }

    #[test]
    fn test_enabled_removes_excluded_names() {
        let excluded: BTreeSet<String> =
            ["register".to_string(), "reload".to_string()].into();
        let enabled = CommandKind::enabled(&excluded);
        assert!(!enabled.contains(&CommandKind::Register));
        assert!(!enabled.contains(&CommandKind::Reload));
        assert!(enabled.contains(&CommandKind::Result));
        assert_eq!(enabled.len(), CommandKind::ALL.len() - 2);
    }

    #[test]
    fn test_unknown_excluded_names_are_ignored() {
        let excluded: BTreeSet<String> = ["dance".to_string()].into();
        assert_eq!(CommandKind::enabled(&excluded).len(), CommandKind::ALL.len());
    }
}
