//! Runtime event stream.

use serde::{Deserialize, Serialize};

use rove_core::{ActorId, GameContext, PassEvent};

/// Notifications published on the runtime's broadcast channel.
///
/// Delivery is best-effort: an event with no subscriber is dropped
/// silently, which is the normal state for headless hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A level was (re)initialized; the player has the first turn.
    LevelInitialized,
    /// An activation pass began; the enemies own the turn.
    PassStarted,
    /// An actor took its step.
    ActorStepped { id: ActorId },
    /// An actor was held in place: out of view in a dungeon, or its step
    /// failed.
    ActorHeld { id: ActorId },
    /// An overworld actor left the valid play area and was marked for
    /// culling.
    ActorMarked { id: ActorId },
    /// The pass finished; the listed actors were culled.
    PassCompleted { removed: Vec<ActorId> },
    /// The session switched map context.
    ContextChanged { context: GameContext },
    /// Turn processing was disabled for good.
    GameEnded,
}

impl From<PassEvent> for GameEvent {
    fn from(event: PassEvent) -> Self {
        match event {
            PassEvent::PassStarted => GameEvent::PassStarted,
            PassEvent::ActorStepped(id) => GameEvent::ActorStepped { id },
            PassEvent::ActorHeld(id) => GameEvent::ActorHeld { id },
            PassEvent::ActorMarked(id) => GameEvent::ActorMarked { id },
            PassEvent::PassCompleted { removed } => GameEvent::PassCompleted { removed },
        }
    }
}
