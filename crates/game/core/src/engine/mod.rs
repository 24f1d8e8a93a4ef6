//! Turn scheduling and actor lifecycle coordination.
//!
//! [`GameEngine`] is the authoritative mutator for [`GameState`]. It owns
//! the turn-ownership protocol, the activation pass over the roster, and
//! the overworld/dungeon transitions. Collaborators are reached through
//! the [`Env`] aggregate passed into each operation, so the engine stays
//! free of rendering, audio, and generation dependencies.

mod errors;
mod transition;
mod turns;

pub use errors::SchedulerError;
pub use turns::PassEvent;

use tracing::{info, warn};

use crate::config::GameConfig;
use crate::env::{Actor, Env};
use crate::state::{ActorId, GameContext, GameState};

/// Engine coordinating turn ownership and the enemy roster.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates an engine borrowing the given session state.
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Resets the session for a freshly loaded level: empties the roster,
    /// rebuilds the overworld board, and gives the player the first turn.
    ///
    /// A session disabled by [`end_game`](Self::end_game) stays disabled
    /// across level loads.
    pub fn init_level(&mut self, env: &Env<'_>) {
        self.state.roster.clear();
        env.board.setup();
        self.state.context = GameContext::Overworld;
        self.state.turn.player_turn = true;
        self.state.turn.pass = None;
        info!("level initialized");
    }

    /// Registers a spawned enemy at the end of the activation order.
    /// Duplicate registration is logged and ignored.
    pub fn register_actor(&mut self, actor: Box<dyn Actor>, env: &Env<'_>) {
        if let Err(error) = self.state.roster.register(actor, env.ambience) {
            warn!(%error, "actor registration rejected");
        }
    }

    /// Removes a dead or despawned enemy. Unknown ids are a no-op.
    pub fn unregister_actor(&mut self, id: ActorId, env: &Env<'_>) {
        self.state.roster.remove(id, env.ambience);
    }

    /// Permanently disables turn processing. An activation pass in flight
    /// is abandoned at the next poll, together with its pending removals.
    pub fn end_game(&mut self) {
        if self.state.turn.pass.take().is_some() {
            info!("abandoning activation pass in flight");
        }
        self.state.turn.ended = true;
        info!("turn processing disabled");
    }

    /// Pass-through to the board collaborator for overworld growth.
    pub fn adjust_board(&self, env: &Env<'_>, dx: i32, dy: i32) {
        env.board.extend(dx, dy);
    }

    pub fn context(&self) -> GameContext {
        self.state.context
    }

    pub fn enemy_count(&self) -> usize {
        self.state.roster.len()
    }

    pub fn is_player_turn(&self) -> bool {
        self.state.turn.player_turn
    }

    pub fn is_activating(&self) -> bool {
        self.state.turn.activating()
    }

    pub fn has_ended(&self) -> bool {
        self.state.turn.ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorId, Tick};
    use crate::testing::{TestActor, TestEnv};

    #[test]
    fn duplicate_registration_keeps_a_single_entry() {
        let mut state = GameState::default();
        let config = GameConfig::default();
        let fixture = TestEnv::new();
        let env = fixture.env();

        let mut engine = GameEngine::new(&mut state, &config);
        engine.register_actor(Box::new(TestActor::new(ActorId(1), Tick(50))), &env);
        engine.register_actor(Box::new(TestActor::new(ActorId(1), Tick(50))), &env);

        assert_eq!(engine.enemy_count(), 1);
    }

    #[test]
    fn init_level_resets_roster_context_and_turn() {
        let mut state = GameState::default();
        state.context = GameContext::Dungeon;
        state.turn.player_turn = false;
        let config = GameConfig::default();
        let fixture = TestEnv::new();
        let env = fixture.env();

        let mut engine = GameEngine::new(&mut state, &config);
        engine.register_actor(Box::new(TestActor::new(ActorId(1), Tick(50))), &env);
        engine.init_level(&env);

        assert_eq!(engine.enemy_count(), 0);
        assert_eq!(engine.context(), GameContext::Overworld);
        assert!(engine.is_player_turn());
        assert_eq!(
            fixture
                .board
                .setups
                .load(std::sync::atomic::Ordering::SeqCst),
            1
        );
    }

    #[test]
    fn end_game_survives_level_reload() {
        let mut state = GameState::default();
        let config = GameConfig::default();
        let fixture = TestEnv::new();
        let env = fixture.env();

        let mut engine = GameEngine::new(&mut state, &config);
        engine.end_game();
        engine.init_level(&env);

        assert!(engine.has_ended());
    }

    #[test]
    fn adjust_board_forwards_offsets() {
        let mut state = GameState::default();
        let config = GameConfig::default();
        let fixture = TestEnv::new();
        let env = fixture.env();

        let engine = GameEngine::new(&mut state, &config);
        engine.adjust_board(&env, 3, -1);

        assert_eq!(*fixture.board.extents.lock().unwrap(), vec![(3, -1)]);
    }
}
