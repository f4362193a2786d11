//! On-disk shape of the installation record.

use serde::{Deserialize, Serialize};

use crate::identifier::InstallationId;
use crate::ports::BoxError;

/// The persisted record: one key mapped to the identifier string.
///
/// ```text
/// installation_id: 3f1c0e9a-7b7e-4c55-9d1a-0b8f2f4c6e11
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    /// The installation identifier.
    pub installation_id: String,
}

impl PersistedRecord {
    /// Builds the record for an identifier.
    #[must_use]
    pub fn new(id: &InstallationId) -> Self {
        Self { installation_id: id.as_str().to_string() }
    }

    /// Serializes the record as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn encode(&self) -> Result<String, BoxError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parses a YAML record and extracts a usable identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents are not a record or the stored
    /// value is blank.
    pub fn decode(contents: &str) -> Result<InstallationId, BoxError> {
        let record: Self = serde_yaml::from_str(contents)?;
        InstallationId::parse(record.installation_id)
            .ok_or_else(|| "installation record holds a blank identifier".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_single_key() {
        let id = InstallationId::parse("abc").unwrap();
        let yaml = PersistedRecord::new(&id).encode().unwrap();
        assert_eq!(yaml.trim(), "installation_id: abc");
    }

    #[test]
    fn decode_rejects_garbage_and_blank() {
        assert!(PersistedRecord::decode("not: [valid").is_err());
        assert!(PersistedRecord::decode("other_key: abc\n").is_err());
        assert!(PersistedRecord::decode("installation_id: ''\n").is_err());
    }

    #[test]
    fn decode_ignores_surrounding_whitespace_in_file() {
        let id = PersistedRecord::decode("\ninstallation_id: abc\n\n").unwrap();
        assert_eq!(id.as_str(), "abc");
    }
}
