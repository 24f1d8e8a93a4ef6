//! Canonical session state consumed by the engine.
//!
//! Everything the turn coordinator mutates lives in [`GameState`]: turn
//! ownership plus pass resumption data, the active map context, and the
//! enemy roster. Collaborator-facing types ([`Position`], [`Tick`],
//! [`ActorId`]) are defined here and re-used across the workspace.

mod common;
mod context;
mod roster;
mod turn;

pub use common::{ActorId, Position, Tick};
pub use context::GameContext;
pub use roster::{ActorRoster, RosterError};
pub use turn::{ActivationPass, PassStage, TurnState};

/// Complete mutable state of one game session.
#[derive(Default)]
pub struct GameState {
    pub turn: TurnState,
    pub context: GameContext,
    pub roster: ActorRoster,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
}
