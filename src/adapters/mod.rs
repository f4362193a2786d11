//! Port implementations.
//!
//! `live` talks to the real disk and randomness source. `memory` keeps
//! everything in-process, for hosts without a writable disk and for tests
//! that need to inject outages or deterministic identifiers.

pub mod live;
pub mod memory;
