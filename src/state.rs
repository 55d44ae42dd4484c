//! Loaded application state
//!
//! One [`AppState`] is built per invocation and passed by `&mut` to the
//! services, which keep the in-memory copy and the files in step.

use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::Transaction;
use crate::storage::Storage;
use crate::store::TransactionStore;

#[derive(Debug)]
pub struct AppState {
    pub store: TransactionStore,
    pub settings: Settings,
    storage: Storage,
    audit: AuditLogger,
}

impl AppState {
    /// Load transactions and settings from the data directory
    pub fn load(paths: TrackerPaths) -> TrackerResult<Self> {
        let storage = Storage::new(paths)?;
        let store = TransactionStore::from_transactions(storage.load_transactions());
        let settings = storage.load_settings();
        let audit = AuditLogger::new(storage.paths().audit_log());
        debug!(
            "Loaded state from {} ({} transactions)",
            storage.paths().base_dir().display(),
            store.len()
        );

        Ok(Self {
            store,
            settings,
            storage,
            audit,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub(crate) fn persist_transactions(&self) -> TrackerResult<()> {
        self.storage.save_transactions(self.store.transactions())
    }

    pub(crate) fn persist_settings(&self) -> TrackerResult<()> {
        self.storage.save_settings(&self.settings)
    }

    /// Write both data files, or neither
    ///
    /// When the settings write fails after the transactions were saved,
    /// `previous` goes back into the transactions file.
    pub(crate) fn persist_dataset(&self, previous: &[Transaction]) -> TrackerResult<()> {
        self.persist_transactions()?;
        if let Err(e) = self.persist_settings() {
            if let Err(restore) = self.storage.save_transactions(previous) {
                warn!("Failed to restore previous transactions: {}", restore);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Append an audit entry. The change it describes is already saved, so
    /// a write failure is only logged.
    pub(crate) fn record(&self, entry: &AuditEntry) {
        if let Err(e) = self.audit.log(entry) {
            warn!("Audit entry for {} not written: {}", entry.entity_id, e);
        }
    }
}
