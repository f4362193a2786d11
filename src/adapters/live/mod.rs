//! Live adapters for real external interactions.

pub mod filesystem;
pub mod id_gen;

pub use filesystem::FileStorage;
pub use id_gen::LiveIdGenerator;
