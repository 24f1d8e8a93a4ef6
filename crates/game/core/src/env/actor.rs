use crate::state::{ActorId, Position, Tick};

/// Reasons an actor can refuse its step for the current turn.
///
/// A failed step never propagates past the engine: the actor is treated
/// as having stood still and the pass continues with the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("path is blocked")]
    Blocked,
    #[error("actor cannot act this turn")]
    Incapacitated,
}

/// Capability surface an enemy unit exposes to the activation pass.
///
/// Implementations own their movement logic and position; the engine only
/// decides when `step` runs and what happens to actors that are out of
/// view or off the board. Visibility and position are pure queries so the
/// core carries no rendering dependency.
pub trait Actor: Send {
    fn id(&self) -> ActorId;

    /// Delay the pass waits after this actor acts, before the next one.
    fn step_delay(&self) -> Tick;

    /// Whether the actor is inside the visible viewport.
    fn is_visible(&self) -> bool;

    fn position(&self) -> Position;

    /// Performs this actor's move for the turn, mutating its own position.
    fn step(&mut self) -> Result<(), StepError>;
}
