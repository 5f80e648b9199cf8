//! Tournament engine facade: command surface, authorization, persistence
//! triggers, and the single-writer actor.

pub mod actor;
pub mod commands;
pub mod errors;
pub mod manager;

pub use actor::{EngineActor, EngineHandle, EngineMessage};
pub use commands::{CommandKind, Reply};
pub use errors::{CommandError, CommandResult};
pub use manager::TournamentEngine;
