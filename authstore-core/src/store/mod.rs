//! Session stores
//!
//! A store persists the session's state in some medium so it survives a
//! restart and can be shared between several holders of the same medium.
//! Concrete stores implement [`Store`] and override the primitives they
//! support; the trait's default bodies are the base behavior (nothing is
//! persisted, restore yields an empty mapping).
//!
//! Stores may emit [`StoreEvent::Updated`](crate::events::StoreEvent) when
//! their medium changed because of something other than their own
//! `persist`/`clear` calls. The session listens to that event and hands the
//! new data to its authenticator, which decides whether the session is still
//! valid. `replace` never emits it.

pub mod ephemeral;
pub mod equality;

pub use ephemeral::EphemeralStore;
pub use equality::flat_objects_are_equal;

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::events::{EventNotifier, StoreObserver, SubscriptionId};

/// Flat key/value data held by a store
///
/// Equality is [`flat_objects_are_equal`], not deep equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreData(BTreeMap<String, Value>);

impl StoreData {
    /// Create empty data
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key/value pairs in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl PartialEq for StoreData {
    fn eq(&self, other: &Self) -> bool {
        flat_objects_are_equal(self, other)
    }
}

impl From<BTreeMap<String, Value>> for StoreData {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for StoreData
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a StoreData {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Trait for session stores
///
/// Every primitive has a default that does nothing, so an implementation
/// only overrides what its medium supports. Errors from the medium
/// propagate unchanged through `replace`.
pub trait Store: Send + Sync {
    /// Persist `data` in the medium
    fn persist(&self, data: &StoreData) -> Result<()> {
        let _ = data;
        Ok(())
    }

    /// Restore everything currently saved in the medium
    ///
    /// Must be free of side effects.
    fn restore(&self) -> Result<StoreData> {
        Ok(StoreData::new())
    }

    /// Clear the medium
    fn clear(&self) -> Result<()> {
        Ok(())
    }

    /// Replace the medium's content with `data`
    ///
    /// Does nothing at all when the current content is already equal to
    /// `data`. Otherwise clears, then persists.
    fn replace(&self, data: &StoreData) -> Result<()> {
        let current = self.restore()?;
        if flat_objects_are_equal(data, &current) {
            tracing::debug!(keys = data.len(), "Store content unchanged, skipping replace");
            return Ok(());
        }

        tracing::debug!(
            old_keys = current.len(),
            new_keys = data.len(),
            "Replacing store content"
        );
        self.clear()?;
        self.persist(data)
    }

    /// Notification channel of this store, if it has one
    fn events(&self) -> Option<&EventNotifier> {
        None
    }

    /// Register an observer for store events
    ///
    /// Returns `None` when the store has no notification channel.
    fn subscribe(&self, observer: Arc<dyn StoreObserver>) -> Option<SubscriptionId> {
        self.events().map(|events| events.subscribe_shared(observer))
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn persist(&self, data: &StoreData) -> Result<()> {
        (**self).persist(data)
    }

    fn restore(&self) -> Result<StoreData> {
        (**self).restore()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }

    fn replace(&self, data: &StoreData) -> Result<()> {
        (**self).replace(data)
    }

    fn events(&self) -> Option<&EventNotifier> {
        (**self).events()
    }

    fn subscribe(&self, observer: Arc<dyn StoreObserver>) -> Option<SubscriptionId> {
        (**self).subscribe(observer)
    }
}

/// The base store
///
/// Persists nothing and always restores an empty mapping. Useful as a
/// starting point and as a placeholder where no persistence is wanted.
#[derive(Debug, Default)]
pub struct BaseStore {
    events: EventNotifier,
}

impl BaseStore {
    /// Create a new base store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for BaseStore {
    fn events(&self) -> Option<&EventNotifier> {
        Some(&self.events)
    }
}
