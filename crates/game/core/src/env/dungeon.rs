use crate::state::Position;

/// Output of one dungeon generation run, handed to the board collaborator
/// when the player steps through an entrance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonLayout {
    /// Floor tiles of the generated dungeon.
    pub grid_positions: Vec<Position>,

    /// Upper corner of the dungeon's bounding box.
    pub max_bound: Position,

    /// Tile holding the dungeon exit.
    pub end_pos: Position,
}

/// Dungeon generator collaborator.
pub trait DungeonOracle: Send + Sync {
    fn generate(&self) -> DungeonLayout;
}
