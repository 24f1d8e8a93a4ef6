//! Overworld/dungeon context transitions.

use tracing::info;

use crate::env::Env;
use crate::state::GameContext;

use super::GameEngine;

impl<'a> GameEngine<'a> {
    /// Moves the session into a freshly generated dungeon.
    ///
    /// The new board must be installed before the world roster is drained,
    /// so no live actor ever references a torn-down board. Draining the
    /// roster drops every world actor for good; dungeon enemies register
    /// themselves once spawned inside.
    pub fn enter_dungeon(&mut self, env: &Env<'_>) {
        let layout = env.dungeon.generate();
        env.board.install_dungeon(&layout);
        env.player.clear_dungeon_transition();
        self.state.context = GameContext::Dungeon;

        let discarded = self.state.roster.len();
        self.state.roster.clear();
        info!(discarded, "entered dungeon");
    }

    /// Returns the session to the overworld.
    ///
    /// Dungeon actors are assumed torn down with the dungeon itself, so
    /// the roster is cleared without individual destruction and the
    /// ambience loop is silenced.
    pub fn exit_dungeon(&mut self, env: &Env<'_>) {
        env.board.restore_world();
        env.player.clear_dungeon_transition();
        self.state.context = GameContext::Overworld;
        self.state.roster.clear();
        env.ambience.set_enemy_ambience(false);
        info!("exited dungeon");
    }
}
