//! Turn-loop coordination for a tile-based roguelike.
//!
//! `rove-core` defines the canonical turn rules: who owns the turn, how
//! the enemy activation pass sweeps the roster, and how overworld/dungeon
//! transitions reshape a session. All state mutation flows through
//! [`engine::GameEngine`]; rendering, audio, and level generation stay
//! behind the narrow collaborator traits in [`env`], so the core is pure
//! and deterministic — it never reads a clock, hosts feed it [`Tick`]s.
pub mod config;
pub mod engine;
pub mod env;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::GameConfig;
pub use engine::{GameEngine, PassEvent, SchedulerError};
pub use env::{
    Actor, AmbienceSink, BoardOracle, DungeonLayout, DungeonOracle, Env, PlayerHooks, StepError,
};
pub use state::{
    ActorId, ActorRoster, GameContext, GameState, Position, RosterError, Tick, TurnState,
};
