//! Error types for engine operations.

/// Errors from explicit turn transitions.
///
/// All of these are recoverable: callers log and carry on, and the
/// scheduler never enters an inconsistent state because of one. Redundant
/// activation polls are not errors at all; `advance_turn_if_ready` treats
/// them as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("turn processing has been disabled")]
    SessionEnded,

    #[error("an activation pass is in flight")]
    PassInFlight,
}
