//! ABI 39 binding.
//!
//! ABI 39 renamed the accessor; the contract is otherwise unchanged.

use std::sync::Arc;

use super::{ProtocolVersion, VersionedBinding};
use crate::service::IdentifierService;

/// Installation id capability as declared by ABI 39 clients.
pub trait Abi39DeviceInstallationUuidManager: Send + Sync {
    /// Returns the installation UUID.
    fn installation_uuid(&self) -> String;
}

/// ABI 39 adapter over the shared service.
#[derive(Clone)]
pub struct Abi39Binding {
    service: Arc<IdentifierService>,
}

impl Abi39Binding {
    /// Creates the adapter.
    #[must_use]
    pub fn new(service: Arc<IdentifierService>) -> Self {
        Self { service }
    }
}

impl Abi39DeviceInstallationUuidManager for Abi39Binding {
    fn installation_uuid(&self) -> String {
        self.service.installation_id().as_str().to_string()
    }
}

impl VersionedBinding for Abi39Binding {
    fn version(&self) -> ProtocolVersion {
        ProtocolVersion::Abi39
    }

    fn installation_id(&self) -> String {
        self.installation_uuid()
    }
}
