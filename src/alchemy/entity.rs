//! Entity identification and display metadata.
//!
//! Every discoverable item ("fire", "steam", ...) is keyed by an `EntityId`.
//! Display data (`name`, `icon`) lives on `Entity`, owned by the `Catalog`;
//! sessions only ever store ids.
//!
//! ```
//! use rule_games::alchemy::{Entity, EntityId};
//!
//! let fire = Entity::new("fire", "Огонь", "🔥");
//! assert_eq!(fire.id, EntityId::new("fire"));
//! assert_eq!(fire.id.as_str(), "fire");
//! ```

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Unique string key of an entity within a catalog.
///
/// Ordered so that unordered pairs can be stored in canonical order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create an entity ID from its key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for EntityId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discoverable item with its display metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Catalog key.
    pub id: EntityId,

    /// Human-readable name shown by the presentation layer.
    pub name: String,

    /// Icon shown next to the name (usually an emoji).
    pub icon: String,
}

impl Entity {
    /// Create a new entity.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}
