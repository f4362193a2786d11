//! Deterministic adapter for the `IdGenerator` port.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::IdGenerator;

/// Yields `<prefix>-1`, `<prefix>-2`, … and counts how many IDs were minted.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    issued: AtomicUsize,
}

impl SequenceIdGenerator {
    /// Creates a generator producing IDs with the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), issued: AtomicUsize::new(0) }
    }

    /// Number of IDs generated so far.
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{n}", self.prefix)
    }
}
