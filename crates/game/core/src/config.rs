use crate::state::Tick;

/// Session configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Delay an activation pass waits before evaluating any actor, and
    /// once more when the roster is empty, so even an enemy-less level
    /// keeps the turn cadence.
    pub turn_delay: Tick,

    /// Adaptive difficulty: halves every actor's step delay during a pass.
    pub enemies_faster: bool,

    /// Adaptive difficulty flag read by AI collaborators; carried here so
    /// it resets with the session.
    pub enemies_smarter: bool,

    /// Spawn chance denominator used by spawner collaborators (1 in N).
    pub enemy_spawn_ratio: u32,

    /// Health the player entity starts a fresh game with.
    pub starting_health: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_DELAY: Tick = Tick(100);
    pub const DEFAULT_SPAWN_RATIO: u32 = 20;
    pub const DEFAULT_STARTING_HEALTH: u32 = 100;

    pub fn new() -> Self {
        Self {
            turn_delay: Self::DEFAULT_TURN_DELAY,
            enemies_faster: false,
            enemies_smarter: false,
            enemy_spawn_ratio: Self::DEFAULT_SPAWN_RATIO,
            starting_health: Self::DEFAULT_STARTING_HEALTH,
        }
    }

    pub fn with_turn_delay(turn_delay: Tick) -> Self {
        Self {
            turn_delay,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
