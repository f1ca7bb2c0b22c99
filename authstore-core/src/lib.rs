//! # authstore Core - pluggable session stores
//!
//! Stores persist an authentication session's state in some medium.
//!
//! This crate provides:
//! - Store contract (`store`) - `persist`/`restore`/`clear`/`replace`
//! - Flat equality (`store::equality`) - change detection for `replace`
//! - Events (`events`) - `updated` notifications for session consumers
//! - Configuration (`config`) - selecting and building a store
//! - Logging (`logging`) - tracing setup

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod store;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::config::{StoreConfig, StoreKind};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventNotifier, StoreEvent, StoreObserver, SubscriptionId};
    pub use crate::logging::LoggingConfig;
    pub use crate::store::{flat_objects_are_equal, BaseStore, EphemeralStore, Store, StoreData};
}
