//! Command dispatch and handlers.

pub mod path;
pub mod show;
pub mod versions;

use crate::cli::Command;
use crate::config::Config;
use crate::context::InstallationContext;

/// Dispatch a parsed command to its handler.
///
/// The storage directory comes from `INSTALL_ID_DIR` (see
/// [`Config::from_env`]).
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = InstallationContext::live(&Config::from_env());
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given installation context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &InstallationContext) -> Result<(), String> {
    let output = match command {
        Command::Show { abi, json } => show::render(ctx, *abi, *json)?,
        Command::Versions => versions::render(),
        Command::Path => path::render(ctx),
    };
    println!("{output}");
    Ok(())
}
