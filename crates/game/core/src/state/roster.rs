use tracing::debug;

use crate::env::{Actor, AmbienceSink};

use super::ActorId;

/// Errors surfaced by roster mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("actor {0} is already registered")]
    DuplicateActor(ActorId),
}

/// Insertion-ordered roster of live enemy actors.
///
/// Registration order is activation order: a pass walks the roster front
/// to back. The roster owns its actors; removing one drops it, which is
/// how enemies are destroyed.
#[derive(Default)]
pub struct ActorRoster {
    actors: Vec<Box<dyn Actor>>,
}

impl ActorRoster {
    pub fn new() -> Self {
        Self { actors: Vec::new() }
    }

    /// Appends an actor at the end of the activation order and flags enemy
    /// presence to the ambience sink.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DuplicateActor` if an actor with the same id
    /// is already registered; the roster is left unchanged.
    pub fn register(
        &mut self,
        actor: Box<dyn Actor>,
        ambience: &dyn AmbienceSink,
    ) -> Result<(), RosterError> {
        let id = actor.id();
        if self.contains(id) {
            return Err(RosterError::DuplicateActor(id));
        }
        self.actors.push(actor);
        ambience.set_enemy_ambience(true);
        Ok(())
    }

    /// Removes and drops the actor with the given id, telling the ambience
    /// sink when the roster empties. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ActorId, ambience: &dyn AmbienceSink) -> bool {
        let Some(index) = self.actors.iter().position(|actor| actor.id() == id) else {
            debug!(actor = %id, "ignoring removal of unregistered actor");
            return false;
        };
        self.actors.remove(index);
        if self.actors.is_empty() {
            ambience.set_enemy_ambience(false);
        }
        true
    }

    /// Empties the roster with no ambience notification; transition and
    /// lifecycle callers decide what the sink should hear.
    pub fn clear(&mut self) {
        self.actors.clear();
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.iter().any(|actor| actor.id() == id)
    }

    /// Ids currently alive, in activation order.
    pub fn ids(&self) -> Vec<ActorId> {
        self.actors.iter().map(|actor| actor.id()).collect()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Box<dyn Actor>> {
        self.actors.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Position, Tick};
    use crate::testing::{RecordingAmbience, TestActor};

    fn actor(id: u32) -> Box<dyn Actor> {
        Box::new(TestActor::new(ActorId(id), Tick(50)).at(Position::new(1, 1)))
    }

    #[test]
    fn registration_preserves_insertion_order() {
        let mut roster = ActorRoster::new();
        let ambience = RecordingAmbience::default();

        roster.register(actor(3), &ambience).unwrap();
        roster.register(actor(1), &ambience).unwrap();
        roster.register(actor(2), &ambience).unwrap();

        assert_eq!(roster.ids(), vec![ActorId(3), ActorId(1), ActorId(2)]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut roster = ActorRoster::new();
        let ambience = RecordingAmbience::default();

        roster.register(actor(7), &ambience).unwrap();
        let result = roster.register(actor(7), &ambience);

        assert_eq!(result, Err(RosterError::DuplicateActor(ActorId(7))));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn removal_of_unknown_id_is_a_noop() {
        let mut roster = ActorRoster::new();
        let ambience = RecordingAmbience::default();

        roster.register(actor(1), &ambience).unwrap();
        assert!(!roster.remove(ActorId(9), &ambience));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn ambience_follows_roster_occupancy() {
        let mut roster = ActorRoster::new();
        let ambience = RecordingAmbience::default();

        roster.register(actor(1), &ambience).unwrap();
        roster.register(actor(2), &ambience).unwrap();
        assert_eq!(ambience.calls(), vec![true, true]);

        roster.remove(ActorId(1), &ambience);
        assert_eq!(ambience.calls(), vec![true, true]);

        roster.remove(ActorId(2), &ambience);
        assert_eq!(ambience.calls(), vec![true, true, false]);
    }

    #[test]
    fn clear_does_not_notify_ambience() {
        let mut roster = ActorRoster::new();
        let ambience = RecordingAmbience::default();

        roster.register(actor(1), &ambience).unwrap();
        roster.clear();

        assert!(roster.is_empty());
        assert_eq!(ambience.calls(), vec![true]);
    }
}
