//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the identifier core and an
//! external system (durable storage, randomness). Implementations live in
//! `src/adapters/`.

pub mod id_gen;
pub mod storage;

pub use id_gen::IdGenerator;
pub use storage::{BoxError, CreateOutcome, RecordStorage};
