//! Installation context bundling the shared service and its bindings.

use std::sync::{Arc, OnceLock};

use crate::adapters::live::{FileStorage, LiveIdGenerator};
use crate::adapters::memory::MemoryStorage;
use crate::bindings::{
    binding_for, Abi37Binding, Abi38Binding, Abi39Binding, ProtocolVersion, VersionedBinding,
};
use crate::config::Config;
use crate::identifier::InstallationId;
use crate::ports::{IdGenerator, RecordStorage};
use crate::service::IdentifierService;
use crate::store::IdentifierStore;

/// Lifecycle-scoped owner of the identifier service.
///
/// Create one at process start and hand its bindings to every loaded
/// protocol version. Constructors wire up different port implementations
/// (file-backed, in-memory, or caller supplied).
pub struct InstallationContext {
    service: Arc<IdentifierService>,
}

impl InstallationContext {
    /// Creates a context backed by files under `config.storage_dir` and a
    /// random UUID generator.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self::with_ports(
            Box::new(FileStorage::new(&config.storage_dir)),
            Box::new(LiveIdGenerator::new()),
        )
    }

    /// Creates a context whose record lives only in this process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_ports(Box::new(MemoryStorage::new()), Box::new(LiveIdGenerator::new()))
    }

    /// Creates a context over caller-supplied ports.
    #[must_use]
    pub fn with_ports(storage: Box<dyn RecordStorage>, id_gen: Box<dyn IdGenerator>) -> Self {
        let store = IdentifierStore::new(storage, id_gen);
        Self { service: Arc::new(IdentifierService::new(store)) }
    }

    /// The shared service.
    #[must_use]
    pub fn service(&self) -> &Arc<IdentifierService> {
        &self.service
    }

    /// Shorthand for `self.service().installation_id()`.
    #[must_use]
    pub fn installation_id(&self) -> &InstallationId {
        self.service.installation_id()
    }

    /// Adapter for ABI 37 clients.
    #[must_use]
    pub fn abi37(&self) -> Abi37Binding {
        Abi37Binding::new(Arc::clone(&self.service))
    }

    /// Adapter for ABI 38 clients.
    #[must_use]
    pub fn abi38(&self) -> Abi38Binding {
        Abi38Binding::new(Arc::clone(&self.service))
    }

    /// Adapter for ABI 39 clients.
    #[must_use]
    pub fn abi39(&self) -> Abi39Binding {
        Abi39Binding::new(Arc::clone(&self.service))
    }

    /// Adapter for a version chosen at runtime.
    #[must_use]
    pub fn binding(&self, version: ProtocolVersion) -> Box<dyn VersionedBinding> {
        binding_for(version, Arc::clone(&self.service))
    }

    /// One adapter per supported version, oldest first.
    #[must_use]
    pub fn bindings(&self) -> Vec<Box<dyn VersionedBinding>> {
        ProtocolVersion::ALL.into_iter().map(|v| self.binding(v)).collect()
    }
}

/// Process-wide context behind the deprecated static accessor, created from
/// [`Config::from_env`] on first use.
fn shared() -> &'static InstallationContext {
    static SHARED: OnceLock<InstallationContext> = OnceLock::new();

    SHARED.get_or_init(|| InstallationContext::live(&Config::from_env()))
}

/// An ID that uniquely identifies this installation of the host application.
///
/// Reads through a process-wide context created from [`Config::from_env`] on
/// first use. New code should hold an [`InstallationContext`] and use its
/// bindings instead.
#[deprecated(
    since = "0.1.0",
    note = "The installation ID API is deprecated and will be removed with SDK 39"
)]
#[must_use]
pub fn device_installation_uuid() -> String {
    shared().installation_id().as_str().to_string()
}
