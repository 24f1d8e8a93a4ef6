//! Traits describing the collaborators the engine calls out to.
//!
//! The core never touches rendering, audio, or level generation directly:
//! it talks to these narrow interfaces and hosts decide what stands behind
//! them. The [`Env`] aggregate bundles the references so engine operations
//! take a single argument.

mod actor;
mod audio;
mod board;
mod dungeon;
mod player;

pub use actor::{Actor, StepError};
pub use audio::AmbienceSink;
pub use board::BoardOracle;
pub use dungeon::{DungeonLayout, DungeonOracle};
pub use player::PlayerHooks;

/// Aggregates the collaborator references engine operations require.
///
/// Every collaborator is mandatory; hosts assemble the aggregate once per
/// call from whatever handles they own.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub board: &'a dyn BoardOracle,
    pub dungeon: &'a dyn DungeonOracle,
    pub ambience: &'a dyn AmbienceSink,
    pub player: &'a dyn PlayerHooks,
}

impl<'a> Env<'a> {
    pub fn new(
        board: &'a dyn BoardOracle,
        dungeon: &'a dyn DungeonOracle,
        ambience: &'a dyn AmbienceSink,
        player: &'a dyn PlayerHooks,
    ) -> Self {
        Self {
            board,
            dungeon,
            ambience,
            player,
        }
    }
}
