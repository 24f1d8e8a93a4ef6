/// Audio collaborator toggled on enemy presence.
pub trait AmbienceSink: Send + Sync {
    /// Starts or stops the enemy-presence ambience loop.
    fn set_enemy_ambience(&self, active: bool);
}
