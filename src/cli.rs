//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::bindings::ProtocolVersion;

/// Top-level CLI parser for `install-id`.
#[derive(Debug, Parser)]
#[command(name = "install-id", version, about = "Inspect this installation's identifier")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the installation identifier, creating it on first use.
    Show {
        /// Read through the binding of this protocol version (e.g. 38).
        #[arg(long, value_name = "VERSION")]
        abi: Option<ProtocolVersion>,
        /// Emit a JSON report instead of the bare identifier.
        #[arg(long)]
        json: bool,
    },
    /// List supported protocol versions.
    Versions,
    /// Print where the installation record is stored.
    Path,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::bindings::ProtocolVersion;
    use clap::Parser;

    #[test]
    fn parses_show_subcommand() {
        let cli = Cli::parse_from(["install-id", "show"]);
        assert!(matches!(cli.command, Command::Show { abi: None, json: false }));
    }

    #[test]
    fn parses_show_with_abi_and_json() {
        let cli = Cli::parse_from(["install-id", "show", "--abi", "38", "--json"]);
        assert!(matches!(
            cli.command,
            Command::Show { abi: Some(ProtocolVersion::Abi38), json: true }
        ));
    }

    #[test]
    fn rejects_unsupported_abi() {
        assert!(Cli::try_parse_from(["install-id", "show", "--abi", "12"]).is_err());
    }

    #[test]
    fn parses_versions_and_path() {
        assert!(matches!(Cli::parse_from(["install-id", "versions"]).command, Command::Versions));
        assert!(matches!(Cli::parse_from(["install-id", "path"]).command, Command::Path));
    }
}
