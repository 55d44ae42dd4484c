//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::diff::generate_diff;
use crate::config::settings::Settings;
use crate::models::Transaction;

/// Kinds of mutation recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// A whole document replaced the stored data
    Import,
    /// Everything was cleared back to defaults
    Reset,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
            Operation::Import => "IMPORT",
            Operation::Reset => "RESET",
        };
        f.write_str(label)
    }
}

/// What an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Settings,
    /// The transaction list and settings together
    Dataset,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityType::Transaction => "Transaction",
            EntityType::Settings => "Settings",
            EntityType::Dataset => "Dataset",
        };
        f.write_str(label)
    }
}

/// A single line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    /// Human-readable label, e.g. the transaction description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn transaction_created(txn: &Transaction) -> Self {
        Self {
            entity_name: Some(txn.description.clone()),
            after: serde_json::to_value(txn).ok(),
            ..Self::new(Operation::Create, EntityType::Transaction, txn.id.as_str())
        }
    }

    pub fn transaction_updated(before: &Transaction, after: &Transaction) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };
        Self {
            entity_name: Some(after.description.clone()),
            before: before_json,
            after: after_json,
            diff_summary,
            ..Self::new(Operation::Update, EntityType::Transaction, after.id.as_str())
        }
    }

    pub fn transaction_deleted(txn: &Transaction) -> Self {
        Self {
            entity_name: Some(txn.description.clone()),
            before: serde_json::to_value(txn).ok(),
            ..Self::new(Operation::Delete, EntityType::Transaction, txn.id.as_str())
        }
    }

    pub fn settings_updated(before: &Settings, after: &Settings) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };
        Self {
            before: before_json,
            after: after_json,
            diff_summary,
            ..Self::new(Operation::Update, EntityType::Settings, "settings")
        }
    }

    /// `replaced` is the number of transactions dropped, `imported` the new count
    pub fn dataset_imported(replaced: usize, imported: usize) -> Self {
        Self {
            diff_summary: Some(format!(
                "transactions: [{} items] -> [{} items]",
                replaced, imported
            )),
            ..Self::new(Operation::Import, EntityType::Dataset, "dataset")
        }
    }

    pub fn dataset_reset(cleared: usize) -> Self {
        Self {
            diff_summary: Some(format!("transactions: [{} items] -> [0 items]", cleared)),
            ..Self::new(Operation::Reset, EntityType::Dataset, "dataset")
        }
    }

    /// One-line rendering for the `history` command
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
