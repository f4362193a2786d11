//! Identifier service: the canonical accessor over the store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::identifier::InstallationId;
use crate::store::IdentifierStore;

/// Whether the in-process identifier is backed by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Durability {
    /// The identifier is the persisted installation record.
    Persisted,
    /// Storage was unavailable; the identifier lives only in this process.
    Ephemeral,
}

/// Lazily initialized, thread-safe accessor for the installation id.
///
/// The first call to [`installation_id`](Self::installation_id) consults the
/// store exactly once, even when many threads race on it; every later call
/// is a lock-free read of the cached value. Storage failures never reach
/// callers: the service substitutes an ephemeral id instead.
pub struct IdentifierService {
    store: IdentifierStore,
    cached: OnceLock<InstallationId>,
    persisted: AtomicBool,
    retry_lock: Mutex<()>,
}

impl IdentifierService {
    /// Creates an uninitialized service over `store`. No I/O happens until
    /// the identifier is first requested.
    #[must_use]
    pub fn new(store: IdentifierStore) -> Self {
        Self {
            store,
            cached: OnceLock::new(),
            persisted: AtomicBool::new(false),
            retry_lock: Mutex::new(()),
        }
    }

    /// Returns the installation identifier, initializing it on first use.
    ///
    /// The returned value never changes for the lifetime of the service.
    #[must_use]
    pub fn installation_id(&self) -> &InstallationId {
        self.cached.get_or_init(|| self.initialize())
    }

    /// Returns the durability of the cached identifier, or `None` if it has
    /// not been requested yet.
    #[must_use]
    pub fn durability(&self) -> Option<Durability> {
        self.cached.get().map(|_| self.current_durability())
    }

    /// Retries persisting an ephemeral identifier.
    ///
    /// Initializes the service first if needed. The in-process value is never
    /// replaced: if another writer persisted a different identifier while
    /// storage was unreachable from here, this process keeps its own value
    /// and stays ephemeral.
    pub fn retry_persist(&self) -> Durability {
        let id = self.installation_id();
        let _guard = self.retry_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.current_durability() == Durability::Persisted {
            return Durability::Persisted;
        }

        match self.store.persist(id) {
            Ok(durable) if &durable == id => {
                info!("ephemeral installation id is now persisted");
                self.persisted.store(true, Ordering::Release);
            }
            Ok(_) => {
                warn!("storage holds a different installation id; keeping in-process value");
            }
            Err(err) => {
                debug!(error = %err, "installation id still cannot be persisted");
            }
        }
        self.current_durability()
    }

    /// Describes where the installation record lives.
    #[must_use]
    pub fn location(&self) -> String {
        self.store.location()
    }

    fn initialize(&self) -> InstallationId {
        match self.store.get_or_create() {
            Ok(id) => {
                self.persisted.store(true, Ordering::Release);
                id
            }
            Err(err) => {
                warn!(error = %err, "falling back to an ephemeral installation id");
                self.store.generate()
            }
        }
    }

    fn current_durability(&self) -> Durability {
        if self.persisted.load(Ordering::Acquire) {
            Durability::Persisted
        } else {
            Durability::Ephemeral
        }
    }
}
