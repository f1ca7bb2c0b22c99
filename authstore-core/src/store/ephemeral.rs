//! In-memory store
//!
//! Keeps data in a process-local slot; nothing survives a restart. Mostly
//! useful for tests and for applications that must not persist credentials.

use parking_lot::RwLock;

use super::{Store, StoreData};
use crate::error::Result;
use crate::events::{EventNotifier, StoreEvent};

/// A store that keeps its data in memory
#[derive(Debug, Default)]
pub struct EphemeralStore {
    data: RwLock<StoreData>,
    events: EventNotifier,
}

impl EphemeralStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `data`
    pub fn with_data(data: StoreData) -> Self {
        Self {
            data: RwLock::new(data),
            events: EventNotifier::new(),
        }
    }

    /// Apply data written to the medium by someone other than this store
    ///
    /// Emits `updated` only when the content actually changed. Returns
    /// whether it did.
    pub fn apply_external(&self, data: StoreData) -> bool {
        {
            let mut slot = self.data.write();
            if *slot == data {
                return false;
            }
            *slot = data.clone();
        }

        tracing::debug!(keys = data.len(), "Ephemeral store changed externally");
        self.events.emit(&StoreEvent::Updated(data));
        true
    }
}

impl Store for EphemeralStore {
    fn persist(&self, data: &StoreData) -> Result<()> {
        tracing::debug!(keys = data.len(), "Persisting to ephemeral store");
        *self.data.write() = data.clone();
        Ok(())
    }

    fn restore(&self) -> Result<StoreData> {
        Ok(self.data.read().clone())
    }

    fn clear(&self) -> Result<()> {
        tracing::debug!("Clearing ephemeral store");
        *self.data.write() = StoreData::new();
        Ok(())
    }

    fn events(&self) -> Option<&EventNotifier> {
        Some(&self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_restore_returns_persisted_data() {
        let store = EphemeralStore::with_data(StoreData::from_iter([("a", json!(1))]));
        let data = StoreData::from_iter([("b", json!(2))]);
        store.persist(&data).unwrap();

        let restored = store.restore().unwrap();
        assert_eq!(restored, data);
        assert!(restored.get("a").is_none());
    }

    #[test]
    fn test_replace_drops_stale_keys() {
        let store = EphemeralStore::with_data(StoreData::from_iter([("a", json!(1))]));
        let next = StoreData::from_iter([("b", json!(2))]);
        store.replace(&next).unwrap();
        assert_eq!(store.restore().unwrap(), next);
    }

    #[test]
    fn test_apply_external_emits_only_on_change() {
        let store = EphemeralStore::new();
        let updates = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&updates);
        store.events().unwrap().subscribe(move |event: &StoreEvent| -> Result<()> {
            assert_eq!(event.data().get("token"), Some(&json!("abc")));
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let data = StoreData::from_iter([("token", json!("abc"))]);
        assert!(store.apply_external(data.clone()));
        assert!(!store.apply_external(data.clone()));
        assert_eq!(updates.load(Ordering::SeqCst), 1);
        assert_eq!(store.restore().unwrap(), data);
    }

    #[test]
    fn test_observer_can_restore_during_update() {
        let store = Arc::new(EphemeralStore::new());
        let seen = Arc::new(AtomicUsize::new(0));

        let inner = Arc::clone(&store);
        let counter = Arc::clone(&seen);
        store.events().unwrap().subscribe(move |_: &StoreEvent| -> Result<()> {
            counter.store(inner.restore()?.len(), Ordering::SeqCst);
            Ok(())
        });

        store.apply_external(StoreData::from_iter([("a", json!(1)), ("b", json!(2))]));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
