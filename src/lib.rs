//! Durable per-installation identifier shared across versioned protocol
//! bindings.
//!
//! One [`InstallationContext`] owns an [`IdentifierService`], which lazily
//! reads or creates the persisted record through an [`IdentifierStore`].
//! Each supported ABI version gets a thin binding over that service, so every
//! version loaded in the process observes the same identifier.

pub mod adapters;
pub mod bindings;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod identifier;
pub mod ports;
pub mod service;
pub mod store;

pub use config::Config;
pub use context::InstallationContext;
#[allow(deprecated)]
pub use context::device_installation_uuid;
pub use error::StoreError;
pub use identifier::InstallationId;
pub use service::{Durability, IdentifierService};
pub use store::IdentifierStore;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
