//! Two-claim result confirmation.

pub mod protocol;

pub use protocol::{ReportError, ReportOutcome, close_match, report};
