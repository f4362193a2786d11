//! In-process adapters.

pub mod id_gen;
pub mod storage;

pub use id_gen::SequenceIdGenerator;
pub use storage::MemoryStorage;
