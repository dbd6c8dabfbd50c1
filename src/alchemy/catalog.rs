//! Entity catalog and combination rule table.
//!
//! The `Catalog` is the immutable half of the alchemy game: every entity the
//! player can ever discover, and the rules saying what two entities produce
//! when mixed. Sessions read it but never modify it.
//!
//! ## Unordered pairs
//!
//! Rules are keyed by `PairKey`, which stores its two ids in canonical
//! (sorted) order. `fire + water` and `water + fire` therefore hit the same
//! map entry; there is no second direction to keep in sync.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::{Entity, EntityId};
use crate::core::{EngineError, EngineResult};

/// Results of one rule. Nearly every rule yields one or two entities.
pub type RuleResults = SmallVec<[EntityId; 2]>;

/// Unordered pair of entity ids in canonical order.
///
/// ```
/// use rule_games::alchemy::PairKey;
///
/// assert_eq!(PairKey::new("fire", "water"), PairKey::new("water", "fire"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    low: EntityId,
    high: EntityId,
}

impl PairKey {
    /// Create a key from two ids in any order.
    pub fn new(a: impl Into<EntityId>, b: impl Into<EntityId>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The two ids, smaller first.
    #[must_use]
    pub fn ids(&self) -> (&EntityId, &EntityId) {
        (&self.low, &self.high)
    }
}

/// Registry of entities and combination rules.
///
/// ## Example
///
/// ```
/// use rule_games::alchemy::{Catalog, Entity, EntityId};
///
/// let mut catalog = Catalog::new();
/// catalog.add_entity(Entity::new("fire", "Fire", "🔥")).unwrap();
/// catalog.add_entity(Entity::new("water", "Water", "💧")).unwrap();
/// catalog.add_entity(Entity::new("steam", "Steam", "☁️")).unwrap();
/// catalog.add_rule("fire", "water", ["steam"]).unwrap();
///
/// let results = catalog.lookup(&EntityId::new("water"), &EntityId::new("fire")).unwrap();
/// assert_eq!(results, &[EntityId::new("steam")]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entities: FxHashMap<EntityId, Entity>,
    rules: FxHashMap<PairKey, RuleResults>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity.
    pub fn add_entity(&mut self, entity: Entity) -> EngineResult<()> {
        if self.entities.contains_key(&entity.id) {
            return Err(EngineError::DuplicateEntity(entity.id));
        }
        self.entities.insert(entity.id.clone(), entity);
        Ok(())
    }

    /// Register a combination rule.
    ///
    /// Both inputs and every result must already be registered. Repeated
    /// results are collapsed, keeping first-seen order.
    pub fn add_rule<I, S>(
        &mut self,
        a: impl Into<EntityId>,
        b: impl Into<EntityId>,
        results: I,
    ) -> EngineResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        let (a, b) = (a.into(), b.into());
        for input in [&a, &b] {
            self.require(input)?;
        }

        let mut collected = RuleResults::new();
        for result in results {
            let result = result.into();
            self.require(&result)?;
            if !collected.contains(&result) {
                collected.push(result);
            }
        }
        if collected.is_empty() {
            return Err(EngineError::EmptyRule(a, b));
        }

        let key = PairKey::new(a, b);
        if self.rules.contains_key(&key) {
            let (low, high) = key.ids();
            return Err(EngineError::DuplicateRule(low.clone(), high.clone()));
        }
        self.rules.insert(key, collected);
        Ok(())
    }

    fn require(&self, id: &EntityId) -> EngineResult<()> {
        if self.entities.contains_key(id) {
            Ok(())
        } else {
            Err(EngineError::UnknownEntity(id.clone()))
        }
    }

    /// Get an entity by ID.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Check if an entity ID is registered.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Find what two entities produce, in either order.
    #[must_use]
    pub fn lookup(&self, a: &EntityId, b: &EntityId) -> Option<&[EntityId]> {
        self.rules
            .get(&PairKey::new(a.clone(), b.clone()))
            .map(SmallVec::as_slice)
    }

    /// Display name of an entity, falling back to its key.
    #[must_use]
    pub fn name_of<'a>(&'a self, id: &'a EntityId) -> &'a str {
        self.get(id).map_or(id.as_str(), |e| e.name.as_str())
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the catalog has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Iterate over all entities.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate over all rules.
    pub fn rules(&self) -> impl Iterator<Item = (&PairKey, &[EntityId])> {
        self.rules.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements() -> Catalog {
        let mut catalog = Catalog::new();
        for (id, name) in [("fire", "Fire"), ("water", "Water"), ("steam", "Steam"), ("alcohol", "Alcohol")] {
            catalog.add_entity(Entity::new(id, name, "?")).unwrap();
        }
        catalog
    }

    fn id(key: &str) -> EntityId {
        EntityId::new(key)
    }

    #[test]
    fn test_pair_key_is_canonical() {
        let key = PairKey::new("water", "fire");
        assert_eq!(key.ids(), (&id("fire"), &id("water")));
        assert_eq!(key, PairKey::new("fire", "water"));
        assert_eq!(PairKey::new("fire", "fire").ids(), (&id("fire"), &id("fire")));
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let mut catalog = elements();
        catalog.add_rule("fire", "water", ["steam", "alcohol"]).unwrap();

        let forward = catalog.lookup(&id("fire"), &id("water"));
        let backward = catalog.lookup(&id("water"), &id("fire"));
        assert_eq!(forward, backward);
        assert_eq!(forward.unwrap(), &[id("steam"), id("alcohol")]);
        assert_eq!(catalog.rule_count(), 1);
    }

    #[test]
    fn test_lookup_missing_pair() {
        let catalog = elements();
        assert!(catalog.lookup(&id("fire"), &id("steam")).is_none());
    }

    #[test]
    fn test_duplicate_entity_rejected() {
        let mut catalog = elements();
        let err = catalog.add_entity(Entity::new("fire", "Again", "")).unwrap_err();
        assert_eq!(err, EngineError::DuplicateEntity(id("fire")));
        assert_eq!(catalog.get(&id("fire")).unwrap().name, "Fire");
    }

    #[test]
    fn test_duplicate_rule_rejected_in_either_order() {
        let mut catalog = elements();
        catalog.add_rule("fire", "water", ["steam"]).unwrap();

        let err = catalog.add_rule("water", "fire", ["alcohol"]).unwrap_err();
        assert_eq!(err, EngineError::DuplicateRule(id("fire"), id("water")));
        assert_eq!(catalog.lookup(&id("fire"), &id("water")).unwrap(), &[id("steam")]);
    }

    #[test]
    fn test_unknown_entities_rejected() {
        let mut catalog = elements();

        let err = catalog.add_rule("fire", "ice", ["steam"]).unwrap_err();
        assert_eq!(err, EngineError::UnknownEntity(id("ice")));

        let err = catalog.add_rule("fire", "water", ["plasma"]).unwrap_err();
        assert_eq!(err, EngineError::UnknownEntity(id("plasma")));
        assert_eq!(catalog.rule_count(), 0);
    }

    #[test]
    fn test_empty_rule_rejected() {
        let mut catalog = elements();
        let err = catalog.add_rule("fire", "water", Vec::<EntityId>::new()).unwrap_err();
        assert_eq!(err, EngineError::EmptyRule(id("fire"), id("water")));
    }

    #[test]
    fn test_repeated_results_collapse() {
        let mut catalog = elements();
        catalog.add_rule("fire", "water", ["steam", "steam", "alcohol"]).unwrap();
        assert_eq!(catalog.lookup(&id("fire"), &id("water")).unwrap().len(), 2);
    }

    #[test]
    fn test_name_of() {
        let catalog = elements();
        assert_eq!(catalog.name_of(&id("steam")), "Steam");
        assert_eq!(catalog.name_of(&id("ghost")), "ghost");
    }
}
