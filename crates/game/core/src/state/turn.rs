use super::{ActorId, Tick};

/// Turn state for the player/enemy alternation.
///
/// The activation pass keeps its resumption point here as plain data
/// (stage, deadline, pending removals) so the engine can be polled once
/// per host frame and resumed without any suspended call stack. The
/// "activating" flag of the two-boolean protocol is derived:
/// a pass is in flight exactly while [`TurnState::pass`] is `Some`.
#[derive(Debug)]
pub struct TurnState {
    /// Whether the player currently owns the turn.
    pub player_turn: bool,

    /// Set by `end_game`; disables all further turn processing.
    pub ended: bool,

    /// Resumption state of the activation pass in flight, if any.
    pub pass: Option<ActivationPass>,
}

impl TurnState {
    /// Creates the initial turn state: the player moves first.
    pub fn new() -> Self {
        Self {
            player_turn: true,
            ended: false,
            pass: None,
        }
    }

    /// True while an activation pass is in flight.
    pub fn activating(&self) -> bool {
        self.pass.is_some()
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Resumption state of one activation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationPass {
    /// Where the pass picks up at the next poll.
    pub stage: PassStage,

    /// The pass does no further work until the clock reaches this point.
    pub deadline: Tick,

    /// Actors marked for destruction during the pass. Applied only after
    /// turn ownership has returned to the player.
    pub pending_removal: Vec<ActorId>,
}

/// Stages of the activation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassStage {
    /// Waiting out the inter-turn delay before evaluating any actor.
    LeadIn,
    /// Second inter-turn delay taken when the roster is empty, so an
    /// enemy-less level keeps a perceptible pause.
    EmptyPause,
    /// Index of the next roster slot to evaluate.
    Actor(usize),
}
