//! # Open Bracket
//!
//! A single-elimination tournament tracker: team registration, a bracket
//! of matches linked by winner-advances edges, and a two-claim result
//! confirmation protocol that closes matches and walks winners forward.
//!
//! ## Architecture
//!
//! Commands flow one direction per message: transport →
//! [`TournamentEngine`] → registry/bracket → reply lines for the
//! transport to relay. The engine owns the whole [`Snapshot`] and is its
//! only mutator. The [`engine::actor`] wrapper serializes commands so no
//! two interleave their read-modify-write sequence, and a mutating
//! command's snapshot is persisted before the next command is admitted.
//!
//! A result closes a match only when reported by someone in a position to
//! attest against their own team's interest: a member of a losing team,
//! or an admin. Anyone else's report is recorded as an unconfirmed claim
//! and the match stays open.
//!
//! ## Core Modules
//!
//! - [`team`]: team registry and records
//! - [`bracket`]: match slots and winner-advances edges
//! - [`confirm`]: the claim/confirm state machine
//! - [`engine`]: command surface, authorization, persistence triggers
//! - [`store`]: snapshot load/save
//!
//! ## Example
//!
//! ```
//! use open_bracket::{MemoryStore, TournamentEngine};
//!
//! let mut engine = TournamentEngine::from_store(Box::new(MemoryStore::default()));
//! engine.create_team("Reds", vec!["ada".to_string()], "ada");
//! engine.create_team("Blues", vec!["bob".to_string()], "bob");
//! engine.add_match(
//!     "Final",
//!     None,
//!     vec!["Reds".to_string(), "Blues".to_string()],
//!     None,
//!     None,
//! );
//! ```

pub mod bracket;
pub mod confirm;
pub mod engine;
pub mod identity;
pub mod state;
pub mod store;
pub mod team;
pub mod timing;

pub use engine::{CommandKind, EngineActor, EngineHandle, Reply, TournamentEngine};
pub use state::{BotConfig, Snapshot, TournamentConfig};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore, StoreError};
