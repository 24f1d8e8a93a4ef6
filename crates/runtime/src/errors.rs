//! Error types surfaced by the runtime API.
//!
//! Recoverable core failures (duplicate registration, stale removal,
//! redundant transitions) never reach the host; they are logged inside
//! [`crate::Runtime`]. What remains is builder misuse.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a board oracle before building")]
    MissingBoard,

    #[error("runtime requires a dungeon oracle before building")]
    MissingDungeon,

    #[error("runtime requires an ambience sink before building")]
    MissingAmbience,

    #[error("runtime requires player hooks before building")]
    MissingPlayer,
}
