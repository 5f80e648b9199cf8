//! Command-level error taxonomy.
//!
//! Every error here is recovered locally: its display string becomes the
//! chat message relayed to the reporter, and the engine carries on.

use thiserror::Error;

use crate::confirm::ReportError;
use crate::store::StoreError;
use crate::team::RegisterError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Register(#[from] RegisterError),

    #[error(transparent)]
    Report(#[from] ReportError),

    /// Caller lacks the authorization the command requires.
    #[error("{0}")]
    Unauthorized(String),

    #[error("Unable to load tournament records: {0}")]
    Persistence(#[from] StoreError),
}

pub type CommandResult<T> = Result<T, CommandError>;
