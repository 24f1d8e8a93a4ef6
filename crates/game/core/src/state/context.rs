/// Active map mode of the session.
///
/// The context decides which actor-validity policy applies during an
/// activation pass: dungeons are bounded rooms where out-of-view enemies
/// stay addressable, the overworld is streamed and culls them for good.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameContext {
    #[default]
    Overworld,
    Dungeon,
}

impl GameContext {
    pub fn in_dungeon(self) -> bool {
        matches!(self, GameContext::Dungeon)
    }
}
