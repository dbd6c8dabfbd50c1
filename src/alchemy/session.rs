//! Alchemy session: discovered entities, two staging slots, combine.
//!
//! ## Lifecycle
//!
//! 1. `AlchemySession::new` seeds `discovered` from `AlchemyConfig`
//! 2. The player stages two discovered entities with `stage`
//! 3. `combine` looks the pair up in the `Catalog` and appends whatever is new
//!
//! A pair with no rule clears the slots and does nothing else. That is a
//! normal outcome (`CombineOutcome::NoReaction`), not an error.
//!
//! ```
//! use rule_games::alchemy::{AlchemySession, Catalog, EntityId, Slot};
//!
//! let catalog = Catalog::classic();
//! let mut session = AlchemySession::classic(&catalog);
//!
//! session.stage(Slot::First, &EntityId::new("fire")).unwrap();
//! session.stage(Slot::Second, &EntityId::new("water")).unwrap();
//!
//! let outcome = session.combine(&catalog);
//! assert_eq!(outcome.newly_discovered(), &[EntityId::new("steam"), EntityId::new("alcohol")]);
//! assert_eq!(session.discovered_count(), 6);
//! ```

use std::cmp::Ordering;

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::catalog::{Catalog, RuleResults};
use super::entity::EntityId;
use crate::core::{AlchemyConfig, EngineError, EngineResult};

/// One of the two staging positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Both slots, in order.
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    /// Position of this slot (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

impl TryFrom<usize> for Slot {
    type Error = EngineError;

    fn try_from(index: usize) -> EngineResult<Self> {
        match index {
            0 => Ok(Slot::First),
            1 => Ok(Slot::Second),
            other => Err(EngineError::InvalidSlot(other)),
        }
    }
}

/// What a call to `combine` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombineOutcome {
    /// At least one slot was empty. Nothing changed.
    Incomplete,

    /// The pair has no rule. Slots were cleared, nothing else changed.
    NoReaction {
        first: EntityId,
        second: EntityId,
    },

    /// The pair matched a rule.
    Reaction {
        /// Everything the rule produces.
        results: RuleResults,
        /// The subset of `results` that was not discovered before.
        discovered: RuleResults,
    },
}

impl CombineOutcome {
    /// Entities discovered by this combination. Empty unless a rule matched
    /// and produced something new.
    #[must_use]
    pub fn newly_discovered(&self) -> &[EntityId] {
        match self {
            CombineOutcome::Reaction { discovered, .. } => discovered.as_slice(),
            CombineOutcome::Incomplete | CombineOutcome::NoReaction { .. } => &[],
        }
    }

    /// Check if a rule matched.
    #[must_use]
    pub fn is_reaction(&self) -> bool {
        matches!(self, CombineOutcome::Reaction { .. })
    }
}

/// Mutable state of one alchemy game.
///
/// Uses `im::Vector` so the presentation layer can hold a snapshot (`clone`)
/// at O(1) cost while the session keeps changing.
///
/// Loading a saved session goes through `RawAlchemySession` and is rejected
/// if the fields break an invariant that `stage` and `combine` maintain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAlchemySession")]
pub struct AlchemySession {
    discovered: Vector<EntityId>,
    slots: [Option<EntityId>; 2],
    combinations: u32,
    last_discovered: Vec<EntityId>,
}

/// Unchecked wire form of `AlchemySession`.
#[derive(Deserialize)]
struct RawAlchemySession {
    discovered: Vector<EntityId>,
    slots: [Option<EntityId>; 2],
    combinations: u32,
    last_discovered: Vec<EntityId>,
}

impl TryFrom<RawAlchemySession> for AlchemySession {
    type Error = EngineError;

    fn try_from(data: RawAlchemySession) -> EngineResult<Self> {
        let mut seen = FxHashSet::default();
        for id in &data.discovered {
            if !seen.insert(id) {
                return Err(EngineError::CorruptSession("entity discovered twice"));
            }
        }
        for staged in data.slots.iter().flatten() {
            if !seen.contains(&staged) {
                return Err(EngineError::InvalidEntity(staged.clone()));
            }
        }
        if data.last_discovered.iter().any(|id| !seen.contains(&id)) {
            return Err(EngineError::CorruptSession(
                "last discovery is missing from discovered",
            ));
        }

        Ok(Self {
            discovered: data.discovered,
            slots: data.slots,
            combinations: data.combinations,
            last_discovered: data.last_discovered,
        })
    }
}

impl AlchemySession {
    /// Start a session with the configured seed elements.
    ///
    /// Every seed must exist in `catalog`. Repeated seeds are kept once.
    pub fn new(catalog: &Catalog, config: &AlchemyConfig) -> EngineResult<Self> {
        let mut discovered = Vector::new();
        for seed in &config.seed_elements {
            if !catalog.contains(seed) {
                return Err(EngineError::UnknownEntity(seed.clone()));
            }
            if !discovered.contains(seed) {
                discovered.push_back(seed.clone());
            }
        }

        debug!(seeds = discovered.len(), "alchemy session started");

        Ok(Self {
            discovered,
            slots: [None, None],
            combinations: 0,
            last_discovered: Vec::new(),
        })
    }

    /// Start a session with the four classic base elements.
    ///
    /// # Panics
    ///
    /// Panics if `catalog` lacks one of them. Use `new` for catalogs that
    /// may not carry the classic elements.
    #[must_use]
    pub fn classic(catalog: &Catalog) -> Self {
        Self::new(catalog, &AlchemyConfig::default())
            .expect("catalog contains the classic seed elements")
    }

    // === Staging ===

    /// Put a discovered entity into a slot, replacing whatever was there.
    pub fn stage(&mut self, slot: Slot, entity: &EntityId) -> EngineResult<()> {
        if !self.is_discovered(entity) {
            return Err(EngineError::InvalidEntity(entity.clone()));
        }
        trace!(slot = slot.index(), %entity, "staged");
        self.slots[slot.index()] = Some(entity.clone());
        Ok(())
    }

    /// `stage` with a raw slot index (0 or 1).
    pub fn stage_index(&mut self, index: usize, entity: &EntityId) -> EngineResult<()> {
        let slot = Slot::try_from(index)?;
        self.stage(slot, entity)
    }

    /// Clear the first slot holding `entity`. No-op if neither does.
    ///
    /// Returns the slot that was cleared.
    pub fn unstage(&mut self, entity: &EntityId) -> Option<Slot> {
        let slot = Slot::ALL
            .into_iter()
            .find(|s| self.slots[s.index()].as_ref() == Some(entity))?;
        trace!(slot = slot.index(), %entity, "unstaged");
        self.slots[slot.index()] = None;
        Some(slot)
    }

    /// Empty a slot, returning what it held.
    pub fn clear_slot(&mut self, slot: Slot) -> Option<EntityId> {
        self.slots[slot.index()].take()
    }

    // === Combination ===

    /// Mix the two staged entities.
    ///
    /// On a match, new results are appended to `discovered` in rule order,
    /// the combination counter goes up (even if nothing was new), and both
    /// slots are cleared. On a miss only the slots are cleared.
    pub fn combine(&mut self, catalog: &Catalog) -> CombineOutcome {
        let (first, second) = match &self.slots {
            [Some(a), Some(b)] => (a.clone(), b.clone()),
            _ => return CombineOutcome::Incomplete,
        };
        self.slots = [None, None];

        let Some(results) = catalog.lookup(&first, &second) else {
            trace!(%first, %second, "no reaction");
            self.last_discovered.clear();
            return CombineOutcome::NoReaction { first, second };
        };

        let mut discovered = RuleResults::new();
        for result in results {
            if !self.discovered.contains(result) {
                self.discovered.push_back(result.clone());
                discovered.push(result.clone());
            }
        }
        self.combinations += 1;
        self.last_discovered = discovered.to_vec();

        debug!(
            %first,
            %second,
            new = discovered.len(),
            total = self.discovered.len(),
            "reaction"
        );

        CombineOutcome::Reaction {
            results: results.iter().cloned().collect(),
            discovered,
        }
    }

    // === Display ordering ===

    /// Reorder `discovered` for display. Stable: equal entries keep their
    /// relative order.
    pub fn sort_discovered_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&EntityId, &EntityId) -> Ordering,
    {
        let mut ids: Vec<EntityId> = self.discovered.iter().cloned().collect();
        ids.sort_by(|a, b| compare(a, b));
        self.discovered = ids.into_iter().collect();
    }

    /// Sort `discovered` by display name.
    pub fn sort_by_name(&mut self, catalog: &Catalog) {
        self.sort_discovered_by(|a, b| catalog.name_of(a).cmp(catalog.name_of(b)));
    }

    // === Queries ===

    /// Discovered entities in display order.
    #[must_use]
    pub fn discovered(&self) -> &Vector<EntityId> {
        &self.discovered
    }

    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    #[must_use]
    pub fn is_discovered(&self, entity: &EntityId) -> bool {
        self.discovered.contains(entity)
    }

    /// Both slots, first then second.
    #[must_use]
    pub fn slots(&self) -> &[Option<EntityId>; 2] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, slot: Slot) -> Option<&EntityId> {
        self.slots[slot.index()].as_ref()
    }

    /// Number of successful combinations so far.
    #[must_use]
    pub fn combinations(&self) -> u32 {
        self.combinations
    }

    /// Entities discovered by the most recent `combine` that reached the
    /// rule table. Empty after a miss.
    #[must_use]
    pub fn last_discovered(&self) -> &[EntityId] {
        &self.last_discovered
    }

    /// Check if every catalog entity has been discovered.
    #[must_use]
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        catalog.entities().all(|e| self.is_discovered(&e.id))
    }
}
