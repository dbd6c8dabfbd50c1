//! Combination engine: an entity catalog, an unordered-pair rule table, and
//! sessions that discover new entities by mixing two staged ones.
//!
//! - `entity`: `EntityId` keys and display metadata
//! - `catalog`: the immutable rule table
//! - `classic`: the built-in 30-element set
//! - `session`: staging slots and `combine`

pub mod catalog;
pub mod classic;
pub mod entity;
pub mod session;

pub use catalog::{Catalog, PairKey, RuleResults};
pub use classic::SEED_ELEMENTS;
pub use entity::{Entity, EntityId};
pub use session::{AlchemySession, CombineOutcome, Slot};
