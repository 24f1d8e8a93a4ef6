//! Demo collaborators backing the scripted session.
//!
//! Everything here logs what a real host would render or play: the board
//! narrates its swaps, the audio sink narrates the ambience loop, and the
//! walker enemies shuffle east until the overworld culls them.

use std::sync::Mutex;

use tracing::info;

use rove_core::{
    Actor, ActorId, AmbienceSink, BoardOracle, DungeonLayout, DungeonOracle, PlayerHooks, Position,
    StepError, Tick,
};

/// Board with a rectangle of valid tiles; swaps are logged, not rendered.
pub struct DemoBoard {
    bounds: Mutex<(i32, i32)>,
}

impl DemoBoard {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Mutex::new((width, height)),
        }
    }
}

impl BoardOracle for DemoBoard {
    fn setup(&self) {
        let (width, height) = *self.bounds.lock().unwrap();
        info!(width, height, "overworld board set up");
    }

    fn is_valid_tile(&self, position: Position) -> bool {
        let (width, height) = *self.bounds.lock().unwrap();
        position.x >= 0 && position.y >= 0 && position.x < width && position.y < height
    }

    fn install_dungeon(&self, layout: &DungeonLayout) {
        info!(
            tiles = layout.grid_positions.len(),
            exit = ?layout.end_pos,
            "dungeon board installed"
        );
    }

    fn restore_world(&self) {
        info!("overworld board restored");
    }

    fn extend(&self, dx: i32, dy: i32) {
        let mut bounds = self.bounds.lock().unwrap();
        bounds.0 += dx;
        bounds.1 += dy;
        info!(width = bounds.0, height = bounds.1, "board extended");
    }
}

/// Generator producing a fixed corridor; enough to walk the transition.
pub struct DemoDungeon;

impl DungeonOracle for DemoDungeon {
    fn generate(&self) -> DungeonLayout {
        let grid_positions = (0..6).map(|x| Position::new(x, 0)).collect::<Vec<_>>();
        DungeonLayout {
            max_bound: Position::new(5, 0),
            end_pos: Position::new(5, 0),
            grid_positions,
        }
    }
}

/// Audio sink that narrates ambience toggles.
pub struct ConsoleAudio;

impl AmbienceSink for ConsoleAudio {
    fn set_enemy_ambience(&self, active: bool) {
        info!(active, "enemy ambience");
    }
}

/// Player stand-in; only the transition flag matters to the coordinator.
pub struct DemoPlayer;

impl PlayerHooks for DemoPlayer {
    fn clear_dungeon_transition(&self) {
        info!("player transition flag cleared");
    }
}

/// Enemy that shuffles one tile east per activation.
pub struct Walker {
    id: ActorId,
    delay: Tick,
    position: Position,
    horizon: i32,
}

impl Walker {
    /// `horizon` is where the walker leaves the viewport and stops being
    /// visible — past it, the overworld policy culls the walker.
    pub fn new(id: u32, position: Position, delay: Tick, horizon: i32) -> Self {
        Self {
            id: ActorId(id),
            delay,
            position,
            horizon,
        }
    }
}

impl Actor for Walker {
    fn id(&self) -> ActorId {
        self.id
    }

    fn step_delay(&self) -> Tick {
        self.delay
    }

    fn is_visible(&self) -> bool {
        self.position.x < self.horizon
    }

    fn position(&self) -> Position {
        self.position
    }

    fn step(&mut self) -> Result<(), StepError> {
        self.position.x += 1;
        info!(walker = %self.id, position = ?self.position, "walker steps east");
        Ok(())
    }
}
