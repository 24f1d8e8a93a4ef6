//! Host-loop integration for the turn coordinator.
//!
//! [`Runtime`] owns the session state and the collaborator handles, maps
//! the clock into engine polls, and republishes engine events on a
//! broadcast channel. It is built through [`RuntimeBuilder`] and driven
//! either one frame at a time with [`Runtime::advance_turn_if_ready`] or
//! with the awaitable [`Runtime::run_enemy_turn`].
//!
//! Everything runs on the caller's task: registration and removal finish
//! synchronously (no yield point inside them), which is what keeps the
//! roster safe to mutate from spawn/death handlers between polls.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{info, warn};

use rove_core::{
    Actor, ActorId, AmbienceSink, BoardOracle, DungeonOracle, Env, GameConfig, GameContext,
    GameEngine, GameState, PlayerHooks,
};

use crate::clock::{Clock, MonotonicClock};
use crate::errors::{Result, RuntimeError};
use crate::events::GameEvent;

/// Runtime configuration shared by the loop and the event plumbing.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    /// Cadence of [`Runtime::run_enemy_turn`]'s polling loop.
    pub tick_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            tick_interval: Duration::from_millis(16),
        }
    }
}

/// Owns one game session and drives it from the host side.
pub struct Runtime {
    config: RuntimeConfig,
    state: GameState,
    board: Arc<dyn BoardOracle>,
    dungeon: Arc<dyn DungeonOracle>,
    ambience: Arc<dyn AmbienceSink>,
    player: Arc<dyn PlayerHooks>,
    clock: Arc<dyn Clock>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl Runtime {
    /// Creates a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Subscribes to the session's event stream.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    /// Clears the roster, rebuilds the board, and starts the level on the
    /// player's turn. Called once by the builder and by the host on every
    /// level load.
    pub fn init_level(&mut self) {
        self.with_engine(|engine, env| engine.init_level(env));
        self.publish(GameEvent::LevelInitialized);
    }

    /// Registers a spawned enemy at the end of the activation order.
    /// Duplicate registration is logged by the engine and ignored.
    pub fn register_actor(&mut self, actor: Box<dyn Actor>) {
        self.with_engine(|engine, env| engine.register_actor(actor, env));
    }

    /// Removes a dead or despawned enemy. Unknown ids are a no-op.
    pub fn unregister_actor(&mut self, id: ActorId) {
        self.with_engine(|engine, env| engine.unregister_actor(id, env));
    }

    /// Hands turn ownership to the enemies after the player's move.
    /// Rejections (session ended, pass in flight) are logged and dropped.
    pub fn end_player_turn(&mut self) {
        if let Err(error) = self.with_engine(|engine, _| engine.end_player_turn()) {
            warn!(%error, "end_player_turn ignored");
        }
    }

    /// Polls the activation pass against the clock. Call once per host
    /// frame; polls that find nothing to do are free.
    pub fn advance_turn_if_ready(&mut self) {
        let now = self.clock.now();
        let events = self.with_engine(|engine, env| engine.advance_turn_if_ready(now, env));
        for event in events {
            self.publish(GameEvent::from(event));
        }
    }

    /// Drives the activation pass to completion after the player's move,
    /// sleeping between polls. Returns once ownership is back with the
    /// player, or immediately if the session has ended.
    pub async fn run_enemy_turn(&mut self) {
        let mut interval = tokio::time::interval(self.config.tick_interval);
        loop {
            interval.tick().await;
            if self.has_ended() {
                break;
            }
            self.advance_turn_if_ready();
            if self.is_player_turn() && !self.is_activating() {
                break;
            }
        }
    }

    /// Moves the session into a freshly generated dungeon.
    pub fn enter_dungeon(&mut self) {
        self.with_engine(|engine, env| engine.enter_dungeon(env));
        self.publish(GameEvent::ContextChanged {
            context: GameContext::Dungeon,
        });
    }

    /// Returns the session to the overworld.
    pub fn exit_dungeon(&mut self) {
        self.with_engine(|engine, env| engine.exit_dungeon(env));
        self.publish(GameEvent::ContextChanged {
            context: GameContext::Overworld,
        });
    }

    /// Permanently disables turn processing; the host loop should stop
    /// polling after this.
    pub fn end_game(&mut self) {
        self.with_engine(|engine, _| engine.end_game());
        self.publish(GameEvent::GameEnded);
        info!("session ended");
    }

    /// Pass-through to the board collaborator for overworld growth.
    pub fn adjust_board(&mut self, dx: i32, dy: i32) {
        self.with_engine(|engine, env| engine.adjust_board(env, dx, dy));
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

    pub fn context(&self) -> GameContext {
        self.state.context
    }

    pub fn enemy_count(&self) -> usize {
        self.state.roster.len()
    }

    /// Runs one engine operation with a freshly assembled [`Env`].
    fn with_engine<R>(&mut self, op: impl FnOnce(&mut GameEngine<'_>, &Env<'_>) -> R) -> R {
        let board = Arc::clone(&self.board);
        let dungeon = Arc::clone(&self.dungeon);
        let ambience = Arc::clone(&self.ambience);
        let player = Arc::clone(&self.player);
        let env = Env::new(&*board, &*dungeon, &*ambience, &*player);

        let mut engine = GameEngine::new(&mut self.state, &self.config.game_config);
        op(&mut engine, &env)
    }

    fn publish(&self, event: GameEvent) {
        // No subscribers is normal; events are best-effort.
        let _ = self.event_tx.send(event);
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    board: Option<Arc<dyn BoardOracle>>,
    dungeon: Option<Arc<dyn DungeonOracle>>,
    ambience: Option<Arc<dyn AmbienceSink>>,
    player: Option<Arc<dyn PlayerHooks>>,
    clock: Option<Arc<dyn Clock>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            board: None,
            dungeon: None,
            ambience: None,
            player: None,
            clock: None,
        }
    }

    /// Overrides the runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the required board collaborator.
    pub fn board(mut self, board: Arc<dyn BoardOracle>) -> Self {
        self.board = Some(board);
        self
    }

    /// Sets the required dungeon generator.
    pub fn dungeon(mut self, dungeon: Arc<dyn DungeonOracle>) -> Self {
        self.dungeon = Some(dungeon);
        self
    }

    /// Sets the required audio collaborator.
    pub fn ambience(mut self, ambience: Arc<dyn AmbienceSink>) -> Self {
        self.ambience = Some(ambience);
        self
    }

    /// Sets the required player hooks.
    pub fn player(mut self, player: Arc<dyn PlayerHooks>) -> Self {
        self.player = Some(player);
        self
    }

    /// Overrides the clock; defaults to [`MonotonicClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds the runtime and initializes the first level.
    ///
    /// # Errors
    ///
    /// Fails if any required collaborator is missing.
    pub fn build(self) -> Result<Runtime> {
        let board = self.board.ok_or(RuntimeError::MissingBoard)?;
        let dungeon = self.dungeon.ok_or(RuntimeError::MissingDungeon)?;
        let ambience = self.ambience.ok_or(RuntimeError::MissingAmbience)?;
        let player = self.player.ok_or(RuntimeError::MissingPlayer)?;
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(MonotonicClock::new()));

        let (event_tx, _) = broadcast::channel(self.config.event_buffer_size);

        let mut runtime = Runtime {
            config: self.config,
            state: GameState::default(),
            board,
            dungeon,
            ambience,
            player,
            clock,
            event_tx,
        };
        runtime.init_level();
        Ok(runtime)
    }
}
