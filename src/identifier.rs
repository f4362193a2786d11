//! The installation identifier value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of one application installation.
///
/// Generated once as a random UUID and never changed afterwards. The
/// string is treated as opaque: records written by older releases are
/// accepted as long as they are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstallationId(String);

impl InstallationId {
    /// Wraps a raw value, rejecting empty or blank strings.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstallationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InstallationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<InstallationId> for String {
    fn from(id: InstallationId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank() {
        assert!(InstallationId::parse("").is_none());
        assert!(InstallationId::parse("  \n").is_none());
    }

    #[test]
    fn parse_keeps_value_verbatim() {
        let id = InstallationId::parse("3f1c0e9a-7b7e-4c55-9d1a-0b8f2f4c6e11").unwrap();
        assert_eq!(id.as_str(), "3f1c0e9a-7b7e-4c55-9d1a-0b8f2f4c6e11");
        assert_eq!(id.to_string(), id.as_str());
    }
}
