//! Turn ownership and the activation pass.
//!
//! The pass is a polled state machine: [`GameEngine::advance_turn_if_ready`]
//! runs it as far as the supplied clock allows and returns, leaving the
//! resumption point in [`crate::state::TurnState`]. Suspension points are
//! exactly the inter-turn delay, the empty-roster pause, and one delay per
//! actor that acts — actor *i+1* is never evaluated before actor *i*'s
//! delay has elapsed, which produces the one-moves-then-the-next cadence.

use tracing::{debug, warn};

use crate::env::Env;
use crate::state::{ActivationPass, ActorId, PassStage, Tick};

use super::{GameEngine, SchedulerError};

/// What an `advance_turn_if_ready` poll did, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassEvent {
    /// An activation pass began; the enemies own the turn.
    PassStarted,
    /// The actor took its step.
    ActorStepped(ActorId),
    /// The actor was held in place: out of view in a dungeon, or its
    /// step failed.
    ActorHeld(ActorId),
    /// Overworld: the actor left the valid play area and was marked for
    /// removal.
    ActorMarked(ActorId),
    /// The pass finished; ownership is back with the player and the
    /// listed actors have been removed, in the order given.
    PassCompleted { removed: Vec<ActorId> },
}

impl<'a> GameEngine<'a> {
    /// Hands turn ownership to the enemies once the player's move has
    /// resolved.
    ///
    /// # Errors
    ///
    /// Rejected after `end_game` and while a pass is in flight; both are
    /// recoverable and callers are expected to log and move on.
    pub fn end_player_turn(&mut self) -> Result<(), SchedulerError> {
        if self.state.turn.ended {
            return Err(SchedulerError::SessionEnded);
        }
        if self.state.turn.activating() {
            return Err(SchedulerError::PassInFlight);
        }
        self.state.turn.player_turn = false;
        Ok(())
    }

    /// Runs the activation pass as far as `now` allows.
    ///
    /// Safe to call every frame: polls during the player's turn, after
    /// `end_game`, or before the current deadline do nothing. A new pass
    /// starts only when ownership is with the enemies and none is in
    /// flight, so redundant polls can never start a second one.
    pub fn advance_turn_if_ready(&mut self, now: Tick, env: &Env<'_>) -> Vec<PassEvent> {
        let mut events = Vec::new();

        if self.state.turn.ended
            || (self.state.turn.player_turn && !self.state.turn.activating())
        {
            return events;
        }

        if self.state.turn.pass.is_none() {
            debug!(actors = self.state.roster.len(), "activation pass starting");
            self.state.turn.pass = Some(ActivationPass {
                stage: PassStage::LeadIn,
                deadline: now + self.config.turn_delay,
                pending_removal: Vec::new(),
            });
            events.push(PassEvent::PassStarted);
        }

        loop {
            let Some(pass) = self.state.turn.pass.as_ref() else {
                break;
            };
            if now < pass.deadline {
                break;
            }

            match pass.stage {
                PassStage::LeadIn => {
                    if self.state.roster.is_empty() {
                        self.bump_deadline(self.config.turn_delay);
                        self.set_stage(PassStage::EmptyPause);
                    } else {
                        self.set_stage(PassStage::Actor(0));
                    }
                }
                PassStage::EmptyPause => {
                    let removed = self.finish_pass(env);
                    events.push(PassEvent::PassCompleted { removed });
                }
                PassStage::Actor(index) => {
                    events.push(self.evaluate_slot(index, env));
                }
            }
        }

        events
    }

    /// Applies the validity policy to one roster slot, advances the stage,
    /// and charges the slot's delay where the policy says so.
    fn evaluate_slot(&mut self, index: usize, env: &Env<'_>) -> PassEvent {
        let in_dungeon = self.state.context.in_dungeon();
        let is_last = index + 1 == self.state.roster.len();

        let outcome = {
            let state = &mut *self.state;
            state.roster.get_mut(index).map(|actor| {
                let id = actor.id();
                if in_dungeon && !actor.is_visible() {
                    // Out-of-view dungeon actors keep their roster slot.
                    // The final slot still charges its delay so the pass
                    // duration stays uniform.
                    let wait = if is_last { Some(actor.step_delay()) } else { None };
                    (PassEvent::ActorHeld(id), wait)
                } else if !in_dungeon
                    && (!actor.is_visible() || !env.board.is_valid_tile(actor.position()))
                {
                    (PassEvent::ActorMarked(id), None)
                } else {
                    let event = match actor.step() {
                        Ok(()) => PassEvent::ActorStepped(id),
                        Err(error) => {
                            warn!(actor = %id, %error, "actor step failed; holding in place");
                            PassEvent::ActorHeld(id)
                        }
                    };
                    (event, Some(actor.step_delay()))
                }
            })
        };

        match outcome {
            // Cursor ran past the roster: every slot has been evaluated and
            // the final delay has elapsed.
            None => {
                let removed = self.finish_pass(env);
                PassEvent::PassCompleted { removed }
            }
            Some((event, wait)) => {
                let wait = wait.map(|delay| self.effective_delay(delay));
                if let Some(pass) = self.state.turn.pass.as_mut() {
                    if let PassEvent::ActorMarked(id) = &event {
                        pass.pending_removal.push(*id);
                    }
                    if let Some(delay) = wait {
                        pass.deadline = pass.deadline + delay;
                    }
                    pass.stage = PassStage::Actor(index + 1);
                }
                event
            }
        }
    }

    /// Returns ownership to the player, then applies pending removals.
    ///
    /// Ownership flips before any destruction so the player's next move is
    /// never blocked behind cleanup.
    fn finish_pass(&mut self, env: &Env<'_>) -> Vec<ActorId> {
        let Some(pass) = self.state.turn.pass.take() else {
            return Vec::new();
        };
        self.state.turn.player_turn = true;
        debug!(
            marked = pass.pending_removal.len(),
            "activation pass complete"
        );

        let mut removed = Vec::new();
        for id in pass.pending_removal {
            if self.state.roster.remove(id, env.ambience) {
                removed.push(id);
            }
        }
        removed
    }

    fn effective_delay(&self, delay: Tick) -> Tick {
        if self.config.enemies_faster {
            Tick(delay.0 / 2)
        } else {
            delay
        }
    }

    fn set_stage(&mut self, stage: PassStage) {
        if let Some(pass) = self.state.turn.pass.as_mut() {
            pass.stage = stage;
        }
    }

    fn bump_deadline(&mut self, delay: Tick) {
        if let Some(pass) = self.state.turn.pass.as_mut() {
            pass.deadline = pass.deadline + delay;
        }
    }
}
