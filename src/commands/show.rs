//! `install-id show` command.

use serde::Serialize;

use crate::bindings::ProtocolVersion;
use crate::context::InstallationContext;
use crate::service::Durability;

/// JSON shape printed by `show --json`.
#[derive(Debug, Serialize)]
struct ShowReport {
    installation_id: String,
    durability: Option<Durability>,
    abi: Option<u32>,
}

/// Renders the installation id, read through the binding for `abi` when
/// given or from the service directly otherwise.
///
/// # Errors
///
/// Returns an error string if the JSON report cannot be serialized.
pub fn render(
    ctx: &InstallationContext,
    abi: Option<ProtocolVersion>,
    json: bool,
) -> Result<String, String> {
    let installation_id = match abi {
        Some(version) => ctx.binding(version).installation_id(),
        None => ctx.installation_id().as_str().to_string(),
    };
    if !json {
        return Ok(installation_id);
    }

    let report = ShowReport {
        installation_id,
        durability: ctx.service().durability(),
        abi: abi.map(ProtocolVersion::number),
    };
    serde_json::to_string_pretty(&report).map_err(|e| format!("Failed to render report: {e}"))
}
