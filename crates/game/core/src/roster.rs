//! Ownership of every character taking part in a fight.
//!
//! Commands and drivers refer to characters through [`ActorId`] handles rather
//! than references, so a command can sit in history while other code keeps
//! mutating the same characters. Ids are dense indices and stay valid for the
//! lifetime of the roster (characters are never removed).

use std::fmt;

use crate::character::Character;
use crate::error::CombatError;

/// Handle to a character stored in a [`Roster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena of characters addressed by [`ActorId`].
#[derive(Clone, Debug, Default)]
pub struct Roster {
    actors: Vec<Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a character and returns its handle.
    pub fn spawn(&mut self, character: Character) -> ActorId {
        let id = ActorId(self.actors.len() as u32);
        tracing::debug!(actor = %id, name = character.name(), "spawned");
        self.actors.push(character);
        id
    }

    pub fn get(&self, id: ActorId) -> Result<&Character, CombatError> {
        self.actors
            .get(id.0 as usize)
            .ok_or(CombatError::ActorNotFound(id))
    }

    pub fn get_mut(&mut self, id: ActorId) -> Result<&mut Character, CombatError> {
        self.actors
            .get_mut(id.0 as usize)
            .ok_or(CombatError::ActorNotFound(id))
    }

    /// Borrows two distinct characters mutably at once.
    pub fn pair_mut(
        &mut self,
        first: ActorId,
        second: ActorId,
    ) -> Result<(&mut Character, &mut Character), CombatError> {
        if first == second {
            return Err(CombatError::SameActor(first));
        }
        let (a, b) = (self.index(first)?, self.index(second)?);

        if a < b {
            let (low, high) = self.actors.split_at_mut(b);
            Ok((&mut low[a], &mut high[0]))
        } else {
            let (low, high) = self.actors.split_at_mut(a);
            Ok((&mut high[0], &mut low[b]))
        }
    }

    pub fn contains(&self, id: ActorId) -> bool {
        (id.0 as usize) < self.actors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Character)> {
        self.actors
            .iter()
            .enumerate()
            .map(|(index, character)| (ActorId(index as u32), character))
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    fn index(&self, id: ActorId) -> Result<usize, CombatError> {
        if self.contains(id) {
            Ok(id.0 as usize)
        } else {
            Err(CombatError::ActorNotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Archetype;
    use crate::stats::Stats;
    use crate::strategy::{AttackStyle, DefenseStyle};

    fn recruit(name: &str) -> Character {
        Character::builder()
            .name(name)
            .archetype(Archetype::Rogue)
            .stats(Stats::full(90, 55, 20, 30).unwrap())
            .attack_style(AttackStyle::Melee)
            .defense_style(DefenseStyle::Standard)
            .build()
            .unwrap()
    }

    #[test]
    fn spawn_hands_out_sequential_ids() {
        let mut roster = Roster::new();
        assert_eq!(roster.spawn(recruit("A")), ActorId(0));
        assert_eq!(roster.spawn(recruit("B")), ActorId(1));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(ActorId(1)).unwrap().name(), "B");
    }

    #[test]
    fn unknown_id_is_reported() {
        let roster = Roster::new();
        assert_eq!(
            roster.get(ActorId(7)).unwrap_err(),
            CombatError::ActorNotFound(ActorId(7))
        );
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut roster = Roster::new();
        let a = roster.spawn(recruit("A"));
        let b = roster.spawn(recruit("B"));

        let (first, second) = roster.pair_mut(b, a).unwrap();
        assert_eq!(first.name(), "B");
        assert_eq!(second.name(), "A");
        first.set_health(1);

        assert_eq!(roster.get(b).unwrap().stats().health(), 1);
    }

    #[test]
    fn pair_mut_rejects_aliasing() {
        let mut roster = Roster::new();
        let a = roster.spawn(recruit("A"));
        assert_eq!(
            roster.pair_mut(a, a).unwrap_err(),
            CombatError::SameActor(a)
        );
        assert_eq!(
            roster.pair_mut(a, ActorId(9)).unwrap_err(),
            CombatError::ActorNotFound(ActorId(9))
        );
    }
}
