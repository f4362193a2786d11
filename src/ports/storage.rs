//! Record storage port for the durable key–value namespace.

/// Boxed error returned by port implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a [`RecordStorage::create_if_absent`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// This call's contents were written and are now the stored record.
    Created,
    /// The key already existed; carries the contents that survived.
    Existing(String),
}

/// Durable key–value storage scoped to the host application's private
/// namespace.
///
/// Records are write-once: there is no update or delete. Implementations
/// must make `create_if_absent` atomic so that concurrent writers, in this
/// process or another one, converge on a single surviving record.
pub trait RecordStorage: Send + Sync {
    /// Reads the contents stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, BoxError>;

    /// Writes `contents` under `key` unless the key already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn create_if_absent(&self, key: &str, contents: &str) -> Result<CreateOutcome, BoxError>;

    /// Describes where the record for `key` lives, for diagnostics.
    fn location(&self, key: &str) -> String;
}

impl<T: RecordStorage + ?Sized> RecordStorage for std::sync::Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, BoxError> {
        (**self).read(key)
    }

    fn create_if_absent(&self, key: &str, contents: &str) -> Result<CreateOutcome, BoxError> {
        (**self).create_if_absent(key, contents)
    }

    fn location(&self, key: &str) -> String {
        (**self).location(key)
    }
}
