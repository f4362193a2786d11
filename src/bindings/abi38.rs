//! ABI 38 binding.

use std::sync::Arc;

use super::{ProtocolVersion, VersionedBinding};
use crate::service::IdentifierService;

/// Installation id capability as declared by ABI 38 clients.
pub trait Abi38DeviceInstallationUuidManager: Send + Sync {
    /// Returns the device installation UUID.
    fn device_installation_uuid(&self) -> String;
}

/// ABI 38 adapter over the shared service.
#[derive(Clone)]
pub struct Abi38Binding {
    service: Arc<IdentifierService>,
}

impl Abi38Binding {
    /// Creates the adapter.
    #[must_use]
    pub fn new(service: Arc<IdentifierService>) -> Self {
        Self { service }
    }
}

impl Abi38DeviceInstallationUuidManager for Abi38Binding {
    fn device_installation_uuid(&self) -> String {
        self.service.installation_id().as_str().to_string()
    }
}

impl VersionedBinding for Abi38Binding {
    fn version(&self) -> ProtocolVersion {
        ProtocolVersion::Abi38
    }

    fn installation_id(&self) -> String {
        self.device_installation_uuid()
    }
}
