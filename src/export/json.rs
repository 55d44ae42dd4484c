//! JSON export and import of the whole dataset

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::settings::{Settings, SettingsUpdate};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::state::AppState;

/// Exported document: `{transactions, settings, exportDate}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    pub transactions: Vec<Transaction>,
    pub settings: Settings,
    pub export_date: DateTime<Utc>,
}

impl FullExport {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            transactions: state.store.transactions().to_vec(),
            settings: state.settings.clone(),
            export_date: Utc::now(),
        }
    }
}

/// A parsed import, ready to replace the stored data
#[derive(Debug, Clone)]
pub struct ImportDocument {
    pub transactions: Vec<Transaction>,
    /// Recognized settings fields; anything absent is left as it is
    pub settings: SettingsUpdate,
}

/// Default export file name, e.g. `finance-export-2025-01-15.json`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("finance-export-{}.json", date.format("%Y-%m-%d"))
}

/// Write the full dataset as pretty-printed JSON
pub fn export_full_json<W: Write>(state: &AppState, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_state(state);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

/// Parse and check an exported document
///
/// Nothing is partially accepted: any bad transaction, a duplicate id or
/// malformed settings rejects the whole document.
pub fn parse_import(json_str: &str) -> TrackerResult<ImportDocument> {
    let document: Value = serde_json::from_str(json_str)
        .map_err(|e| TrackerError::Import(format!("Invalid JSON: {}", e)))?;

    let Some(raw_transactions) = document.get("transactions").and_then(Value::as_array) else {
        return Err(TrackerError::Import(
            "Invalid import data: transactions must be an array".into(),
        ));
    };

    let mut seen = HashSet::new();
    let mut transactions = Vec::with_capacity(raw_transactions.len());
    for (index, raw) in raw_transactions.iter().enumerate() {
        let txn: Transaction = serde_json::from_value(raw.clone()).map_err(|e| {
            TrackerError::Import(format!("Invalid transaction at position {}: {}", index + 1, e))
        })?;
        if !seen.insert(txn.id.clone()) {
            return Err(TrackerError::Import(format!(
                "Duplicate transaction id: {}",
                txn.id
            )));
        }
        transactions.push(txn);
    }

    let settings = match document.get("settings") {
        None | Some(Value::Null) => SettingsUpdate::default(),
        Some(raw) => serde_json::from_value(raw.clone())
            .map_err(|e| TrackerError::Import(format!("Invalid settings: {}", e)))?,
    };

    Ok(ImportDocument {
        transactions,
        settings,
    })
}
