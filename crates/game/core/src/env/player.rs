/// Hooks into the player entity that context transitions must touch.
pub trait PlayerHooks: Send + Sync {
    /// Clears the player's in-transit flag once a context change lands.
    fn clear_dungeon_transition(&self);
}
