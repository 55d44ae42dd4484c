//! Transaction identifiers
//!
//! Identifiers are opaque strings. New ones are generated from a random UUID,
//! but any non-empty string is accepted on load so that documents produced
//! elsewhere (e.g. `txn_1`) keep their ids.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const PREFIX: &str = "txn_";

/// Unique, immutable identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(format!("{}{}", PREFIX, Uuid::new_v4().simple()))
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for table display
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(PREFIX.len() + 8)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when parsing an empty identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyIdError;

impl fmt::Display for EmptyIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transaction id cannot be empty")
    }
}

impl std::error::Error for EmptyIdError {}

impl FromStr for TransactionId {
    type Err = EmptyIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmptyIdError);
        }
        Ok(Self(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("txn_"));
    }

    #[test]
    fn test_short_form() {
        let id = TransactionId::new();
        assert_eq!(id.short().len(), 12);
        let legacy: TransactionId = "txn_1".parse().unwrap();
        assert_eq!(legacy.short(), "txn_1");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("  ".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id: TransactionId = "txn_2".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"txn_2\"");
        let back: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
        assert!(serde_json::from_str::<TransactionId>("\"\"").is_err());
    }
}
