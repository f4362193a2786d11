//! `install-id versions` command.

use crate::bindings::ProtocolVersion;

/// Lists supported protocol versions, one per line.
#[must_use]
pub fn render() -> String {
    ProtocolVersion::ALL.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    #[test]
    fn lists_all_versions() {
        assert_eq!(super::render(), "ABI37\nABI38\nABI39");
    }
}
