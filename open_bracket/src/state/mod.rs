//! Snapshot state: configuration sections and ordered collections.

pub mod ordered;
pub mod snapshot;

pub use ordered::OrderedMap;
pub use snapshot::{BotConfig, Snapshot, TournamentConfig};
