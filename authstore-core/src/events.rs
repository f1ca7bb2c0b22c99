//! Store change notifications
//!
//! A store that notices its medium was changed by someone else (another
//! process sharing the same storage, for example) announces it through an
//! [`EventNotifier`]. The session subscribes and re-validates on `updated`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::store::StoreData;

/// Events a store may emit
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The medium changed outside of the store's own persist/clear calls
    Updated(StoreData),
}

impl StoreEvent {
    /// Conventional event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Updated(_) => "updated",
        }
    }

    /// Data carried by the event
    pub fn data(&self) -> &StoreData {
        match self {
            Self::Updated(data) => data,
        }
    }
}

/// Trait for observing store events
pub trait StoreObserver: Send + Sync {
    /// Handle a store event
    fn on_event(&self, event: &StoreEvent) -> Result<()>;
}

impl<F> StoreObserver for F
where
    F: Fn(&StoreEvent) -> Result<()> + Send + Sync,
{
    fn on_event(&self, event: &StoreEvent) -> Result<()> {
        self(event)
    }
}

/// Handle returned by [`EventNotifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous listener list
///
/// Observers run in registration order on the emitting thread.
pub struct EventNotifier {
    observers: RwLock<Vec<(SubscriptionId, Arc<dyn StoreObserver>)>>,
    next_id: AtomicU64,
}

impl EventNotifier {
    /// Create a notifier with no observers
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register an observer
    pub fn subscribe(&self, observer: impl StoreObserver + 'static) -> SubscriptionId {
        self.subscribe_shared(Arc::new(observer))
    }

    /// Register an observer that is already shared
    pub fn subscribe_shared(&self, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, observer));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    /// Whether no observer is registered
    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }

    /// Deliver an event to every observer
    pub fn emit(&self, event: &StoreEvent) {
        // Snapshot so observers may (un)subscribe while handling the event
        let observers: Vec<Arc<dyn StoreObserver>> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        tracing::debug!(event = event.name(), observers = observers.len(), "Emitting store event");

        for observer in observers {
            if let Err(e) = observer.on_event(event) {
                tracing::error!("Observer failed to handle '{}' event: {}", event.name(), e);
            }
        }
    }
}

impl Default for EventNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventNotifier")
            .field("observers", &self.len())
            .finish()
    }
}
