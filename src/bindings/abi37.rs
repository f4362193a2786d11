//! ABI 37 binding.

use std::sync::Arc;

use super::{ProtocolVersion, VersionedBinding};
use crate::service::IdentifierService;

/// Installation id capability as declared by ABI 37 clients.
pub trait Abi37DeviceInstallationUuidManager: Send + Sync {
    /// Returns the device installation UUID.
    fn device_installation_uuid(&self) -> String;
}

/// ABI 37 adapter over the shared service.
#[derive(Clone)]
pub struct Abi37Binding {
    service: Arc<IdentifierService>,
}

impl Abi37Binding {
    /// Creates the adapter.
    #[must_use]
    pub fn new(service: Arc<IdentifierService>) -> Self {
        Self { service }
    }
}

impl Abi37DeviceInstallationUuidManager for Abi37Binding {
    fn device_installation_uuid(&self) -> String {
        self.service.installation_id().as_str().to_string()
    }
}

impl VersionedBinding for Abi37Binding {
    fn version(&self) -> ProtocolVersion {
        ProtocolVersion::Abi37
    }

    fn installation_id(&self) -> String {
        self.device_installation_uuid()
    }
}
