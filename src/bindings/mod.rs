//! Versioned protocol bindings.
//!
//! Each supported ABI version declares its own capability trait for reading
//! the installation id. Every adapter forwards to the same
//! [`IdentifierService`], so all versions loaded in one process observe the
//! same value. Adapters never cache and never fail.

pub mod abi37;
pub mod abi38;
pub mod abi39;
pub mod version;

use std::sync::Arc;

use crate::service::IdentifierService;

pub use abi37::{Abi37Binding, Abi37DeviceInstallationUuidManager};
pub use abi38::{Abi38Binding, Abi38DeviceInstallationUuidManager};
pub use abi39::{Abi39Binding, Abi39DeviceInstallationUuidManager};
pub use version::ProtocolVersion;

/// Version-agnostic view of a binding, for hosts that select a binding at
/// runtime.
pub trait VersionedBinding: Send + Sync {
    /// The protocol version this binding implements.
    fn version(&self) -> ProtocolVersion;

    /// Returns the installation id through this version's accessor.
    fn installation_id(&self) -> String;
}

/// Builds the adapter for `version` over `service`.
#[must_use]
pub fn binding_for(
    version: ProtocolVersion,
    service: Arc<IdentifierService>,
) -> Box<dyn VersionedBinding> {
    match version {
        ProtocolVersion::Abi37 => Box::new(Abi37Binding::new(service)),
        ProtocolVersion::Abi38 => Box::new(Abi38Binding::new(service)),
        ProtocolVersion::Abi39 => Box::new(Abi39Binding::new(service)),
    }
}
