//! Identifier store: durable, write-once provisioning of the identifier.
//!
//! All I/O goes through the `RecordStorage` port so the store works with
//! file-backed and in-memory storage alike. The record lives under a single
//! stable key:
//!
//! ```text
//! <storage root>/
//!   └── installation_id
//! ```

pub mod record;

use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::error::{StorageOperation, StoreError};
use crate::identifier::InstallationId;
use crate::ports::{BoxError, CreateOutcome, IdGenerator, RecordStorage};

pub use record::PersistedRecord;

/// Storage key of the installation record. Stable across releases.
pub const INSTALLATION_RECORD_KEY: &str = "installation_id";

/// Provisions the installation identifier on top of a storage port.
///
/// Writers in this process are serialized by an internal mutex; writers in
/// other processes are serialized by the port's atomic `create_if_absent`.
/// Either way only one generated value is ever persisted.
pub struct IdentifierStore {
    storage: Box<dyn RecordStorage>,
    id_gen: Box<dyn IdGenerator>,
    write_lock: Mutex<()>,
}

impl IdentifierStore {
    /// Creates a store over the given storage and ID generator.
    #[must_use]
    pub fn new(storage: Box<dyn RecordStorage>, id_gen: Box<dyn IdGenerator>) -> Self {
        Self { storage, id_gen, write_lock: Mutex::new(()) }
    }

    /// Returns the persisted identifier, generating and persisting one if
    /// none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] if the record cannot be
    /// read or written, or if the stored record is unusable.
    pub fn get_or_create(&self) -> Result<InstallationId, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = self.load()? {
            debug!(location = %self.location(), "loaded persisted installation id");
            return Ok(existing);
        }

        let candidate = self.generate();
        debug!("no installation record found, generated a new id");
        self.persist_locked(&candidate)
    }

    /// Persists an identifier that was generated earlier, typically an
    /// in-memory fallback minted while storage was unavailable.
    ///
    /// Returns the identifier that is durable after the call. That is a
    /// different value when another writer persisted first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] if the record cannot be
    /// written, or if the record that won is unusable.
    pub fn persist(&self, id: &InstallationId) -> Result<InstallationId, StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.persist_locked(id)
    }

    /// Mints a fresh identifier without touching storage.
    ///
    /// # Panics
    ///
    /// Panics if the configured generator returns a blank string.
    #[must_use]
    pub fn generate(&self) -> InstallationId {
        InstallationId::parse(self.id_gen.generate_id())
            .expect("id generator must produce non-blank identifiers")
    }

    /// Describes where the installation record lives.
    #[must_use]
    pub fn location(&self) -> String {
        self.storage.location(INSTALLATION_RECORD_KEY)
    }

    fn load(&self) -> Result<Option<InstallationId>, StoreError> {
        let contents = self
            .storage
            .read(INSTALLATION_RECORD_KEY)
            .map_err(|e| self.unavailable(StorageOperation::Read, e))?;
        contents.map(|c| self.decode(&c)).transpose()
    }

    fn persist_locked(&self, id: &InstallationId) -> Result<InstallationId, StoreError> {
        let contents = PersistedRecord::new(id)
            .encode()
            .map_err(|e| self.unavailable(StorageOperation::Write, e))?;

        match self.storage.create_if_absent(INSTALLATION_RECORD_KEY, &contents) {
            Ok(CreateOutcome::Created) => {
                info!(location = %self.location(), "persisted new installation id");
                Ok(id.clone())
            }
            Ok(CreateOutcome::Existing(winner)) => {
                let winner = self.decode(&winner)?;
                if &winner != id {
                    warn!(
                        location = %self.location(),
                        "another writer persisted an installation id first; adopting it"
                    );
                }
                Ok(winner)
            }
            Err(e) => Err(self.unavailable(StorageOperation::Write, e)),
        }
    }

    fn decode(&self, contents: &str) -> Result<InstallationId, StoreError> {
        PersistedRecord::decode(contents).map_err(|e| self.unavailable(StorageOperation::Read, e))
    }

    fn unavailable(&self, operation: StorageOperation, source: BoxError) -> StoreError {
        StoreError::StorageUnavailable { operation, location: self.location(), source }
    }
}
