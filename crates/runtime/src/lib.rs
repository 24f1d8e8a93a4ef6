//! Host integration for the rove turn coordinator.
//!
//! Wires the deterministic core to a clock, a tokio polling loop, and a
//! broadcast event stream. Hosts assemble a [`Runtime`] through
//! [`RuntimeBuilder`] with their own collaborator implementations, then
//! call the turn API from their frame loop (or await
//! [`Runtime::run_enemy_turn`] between player moves).
pub mod clock;
pub mod errors;
pub mod events;
pub mod runtime;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use errors::{Result, RuntimeError};
pub use events::GameEvent;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
