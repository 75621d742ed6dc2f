use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable backend identifier for a dictionary entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Creates a new `EntryId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse EntryId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for EntryId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(EntryId::new)
            .map_err(|_| ParseIdError { raw: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_display() {
        let id = EntryId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn entry_id_from_str() {
        let id: EntryId = "123".parse().unwrap();
        assert_eq!(id, EntryId::new(123));
    }

    #[test]
    fn entry_id_from_str_invalid() {
        let err = "not-a-number".parse::<EntryId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse EntryId from \"not-a-number\"");
    }

    #[test]
    fn entry_id_is_a_bare_number_on_the_wire() {
        let json = serde_json::to_string(&EntryId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: EntryId = serde_json::from_str("7").unwrap();
        assert_eq!(back, EntryId::new(7));
    }
}
