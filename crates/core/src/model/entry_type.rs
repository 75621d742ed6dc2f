use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    Radical,
    Kanji,
    Vocab,
}

impl EntryType {
    /// Wire name, as sent by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Radical => "RADICAL",
            EntryType::Kanji => "KANJI",
            EntryType::Vocab => "VOCAB",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EntryType::Radical => "Radical",
            EntryType::Kanji => "Kanji",
            EntryType::Vocab => "Vocab",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entry type: {raw}")]
pub struct ParseEntryTypeError {
    raw: String,
}

impl FromStr for EntryType {
    type Err = ParseEntryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RADICAL" => Ok(EntryType::Radical),
            "KANJI" => Ok(EntryType::Kanji),
            "VOCAB" => Ok(EntryType::Vocab),
            _ => Err(ParseEntryTypeError { raw: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("kanji".parse::<EntryType>().unwrap(), EntryType::Kanji);
        assert_eq!("VOCAB".parse::<EntryType>().unwrap(), EntryType::Vocab);
        let err = "phrase".parse::<EntryType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown entry type: phrase");
    }

    #[test]
    fn serializes_upper_case() {
        let json = serde_json::to_string(&EntryType::Radical).unwrap();
        assert_eq!(json, "\"RADICAL\"");
    }
}
