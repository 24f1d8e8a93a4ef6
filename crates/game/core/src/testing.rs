//! Shared test doubles for roster and engine tests.

use std::sync::atomic::AtomicU32;
use std::sync::{Arc, Mutex};

use crate::env::{
    Actor, AmbienceSink, BoardOracle, DungeonLayout, DungeonOracle, Env, PlayerHooks, StepError,
};
use crate::state::{ActorId, Position, Tick};

/// Ordered record of which actors stepped, shared between a test and the
/// actors it moved into the roster.
pub(crate) type StepLog = Arc<Mutex<Vec<ActorId>>>;

pub(crate) fn new_step_log() -> StepLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Scripted enemy that walks one tile east per step.
pub(crate) struct TestActor {
    id: ActorId,
    delay: Tick,
    visible: bool,
    position: Position,
    fail_step: bool,
    log: Option<StepLog>,
}

impl TestActor {
    pub fn new(id: ActorId, delay: Tick) -> Self {
        Self {
            id,
            delay,
            visible: true,
            position: Position::ORIGIN,
            fail_step: false,
            log: None,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn invisible(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_step = true;
        self
    }

    pub fn logged(mut self, log: &StepLog) -> Self {
        self.log = Some(Arc::clone(log));
        self
    }
}

impl Actor for TestActor {
    fn id(&self) -> ActorId {
        self.id
    }

    fn step_delay(&self) -> Tick {
        self.delay
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn position(&self) -> Position {
        self.position
    }

    fn step(&mut self) -> Result<(), StepError> {
        if self.fail_step {
            return Err(StepError::Blocked);
        }
        self.position.x += 1;
        if let Some(log) = &self.log {
            log.lock().unwrap().push(self.id);
        }
        Ok(())
    }
}

/// Board stub: a `width x height` rectangle of valid tiles at the origin.
pub(crate) struct TestBoard {
    width: i32,
    height: i32,
    pub setups: AtomicU32,
    pub restores: AtomicU32,
    pub installed: Mutex<Option<DungeonLayout>>,
    pub extents: Mutex<Vec<(i32, i32)>>,
}

impl TestBoard {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            setups: AtomicU32::new(0),
            restores: AtomicU32::new(0),
            installed: Mutex::new(None),
            extents: Mutex::new(Vec::new()),
        }
    }
}

impl BoardOracle for TestBoard {
    fn setup(&self) {
        self.setups.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn is_valid_tile(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    fn install_dungeon(&self, layout: &DungeonLayout) {
        *self.installed.lock().unwrap() = Some(layout.clone());
    }

    fn restore_world(&self) {
        self.restores
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn extend(&self, dx: i32, dy: i32) {
        self.extents.lock().unwrap().push((dx, dy));
    }
}

/// Generator stub returning a fixed two-tile corridor.
pub(crate) struct TestDungeon;

impl DungeonOracle for TestDungeon {
    fn generate(&self) -> DungeonLayout {
        DungeonLayout {
            grid_positions: vec![Position::new(0, 0), Position::new(1, 0)],
            max_bound: Position::new(1, 0),
            end_pos: Position::new(1, 0),
        }
    }
}

/// Ambience stub recording every toggle in order.
#[derive(Default)]
pub(crate) struct RecordingAmbience {
    calls: Mutex<Vec<bool>>,
}

impl RecordingAmbience {
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

impl AmbienceSink for RecordingAmbience {
    fn set_enemy_ambience(&self, active: bool) {
        self.calls.lock().unwrap().push(active);
    }
}

/// Player stub counting transition-flag clears.
#[derive(Default)]
pub(crate) struct RecordingPlayer {
    pub transitions_cleared: AtomicU32,
}

impl PlayerHooks for RecordingPlayer {
    fn clear_dungeon_transition(&self) {
        self.transitions_cleared
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

/// Bundle of collaborator stubs with an [`Env`] view over them.
pub(crate) struct TestEnv {
    pub board: TestBoard,
    pub dungeon: TestDungeon,
    pub ambience: RecordingAmbience,
    pub player: RecordingPlayer,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            board: TestBoard::new(8, 8),
            dungeon: TestDungeon,
            ambience: RecordingAmbience::default(),
            player: RecordingPlayer::default(),
        }
    }

    pub fn env(&self) -> Env<'_> {
        Env::new(&self.board, &self.dungeon, &self.ambience, &self.player)
    }
}
