//! Storage layer for the finance tracker
//!
//! JSON files in the data directory, written atomically. Loads never fail:
//! unreadable data is logged and replaced by an empty list or the default
//! settings. Saves report every failure.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use tracing::{debug, warn};

use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::TrackerError;
use crate::models::Transaction;

/// Persistence gateway over the tracker's data files
#[derive(Debug, Clone)]
pub struct Storage {
    paths: TrackerPaths,
}

impl Storage {
    /// Create a storage handle, creating the data directories if needed
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Stored transactions, newest insert first
    pub fn load_transactions(&self) -> Vec<Transaction> {
        match read_json::<Vec<Transaction>, _>(self.paths.transactions_file()) {
            Ok(transactions) => {
                debug!("Loaded {} transactions", transactions.len());
                transactions
            }
            Err(e) => {
                warn!("Ignoring stored transactions: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), TrackerError> {
        write_json_atomic(self.paths.transactions_file(), &transactions)?;
        debug!("Saved {} transactions", transactions.len());
        Ok(())
    }

    pub fn load_settings(&self) -> Settings {
        Settings::load_or_create(&self.paths)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), TrackerError> {
        settings.save(&self.paths)
    }
}
