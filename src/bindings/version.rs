//! Supported protocol (ABI) versions.

use std::fmt;
use std::str::FromStr;

/// A frozen binding-protocol version that clients may be built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProtocolVersion {
    /// ABI 37.
    Abi37,
    /// ABI 38.
    Abi38,
    /// ABI 39.
    Abi39,
}

impl ProtocolVersion {
    /// Every supported version, oldest first.
    pub const ALL: [Self; 3] = [Self::Abi37, Self::Abi38, Self::Abi39];

    /// The numeric version.
    #[must_use]
    pub fn number(self) -> u32 {
        match self {
            Self::Abi37 => 37,
            Self::Abi38 => 38,
            Self::Abi39 => 39,
        }
    }

    /// Looks up a version by number.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.number() == number)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ABI{}", self.number())
    }
}

impl FromStr for ProtocolVersion {
    type Err = String;

    /// Accepts `"38"`, `"ABI38"` or `"abi38"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("ABI")
            .or_else(|| trimmed.strip_prefix("abi"))
            .unwrap_or(trimmed);
        let supported =
            Self::ALL.iter().map(|v| v.number().to_string()).collect::<Vec<_>>().join(", ");
        digits
            .parse::<u32>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| format!("unsupported protocol version {s:?} (supported: {supported})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_prefixed_names() {
        assert_eq!("37".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::Abi37);
        assert_eq!("ABI38".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::Abi38);
        assert_eq!("abi39".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::Abi39);
    }

    #[test]
    fn rejects_unsupported_versions() {
        let err = "36".parse::<ProtocolVersion>().unwrap_err();
        assert!(err.contains("supported: 37, 38, 39"));
        assert!("latest".parse::<ProtocolVersion>().is_err());
    }

    #[test]
    fn displays_as_abi_name() {
        assert_eq!(ProtocolVersion::Abi39.to_string(), "ABI39");
    }
}
