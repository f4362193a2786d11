//! ID generator port for producing installation identifiers.

/// Generates unique identifiers.
///
/// Abstracting ID generation allows tests to substitute a predictable
/// sequence and count how many identifiers were minted.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}

impl<T: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<T> {
    fn generate_id(&self) -> String {
        (**self).generate_id()
    }
}
