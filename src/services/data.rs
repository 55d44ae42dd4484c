//! Whole-dataset operations: import, reset and sample data

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::audit::AuditEntry;
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::export::parse_import;
use crate::models::{Money, Transaction, TransactionDraft, TransactionId};
use crate::services::settings::check_update;
use crate::state::AppState;

/// Counts reported back after an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub replaced: usize,
    pub imported: usize,
}

pub struct DataService<'a> {
    state: &'a mut AppState,
}

impl<'a> DataService<'a> {
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    /// Replace all transactions and merge settings from an exported document
    ///
    /// The document is fully checked before anything changes.
    pub fn import_json(&mut self, json_str: &str) -> TrackerResult<ImportSummary> {
        let document = parse_import(json_str)?;
        check_update(&document.settings)?;

        let summary = ImportSummary {
            replaced: self.state.store.len(),
            imported: document.transactions.len(),
        };

        let mut settings = self.state.settings.clone();
        settings.apply(document.settings);
        self.replace_dataset(document.transactions, settings)?;
        self.state.record(&AuditEntry::dataset_imported(
            summary.replaced,
            summary.imported,
        ));

        info!(
            "Imported {} transactions (replaced {})",
            summary.imported, summary.replaced
        );
        Ok(summary)
    }

    /// Delete every transaction and restore default settings
    pub fn reset(&mut self) -> TrackerResult<usize> {
        let cleared = self.state.store.len();

        self.replace_dataset(Vec::new(), Settings::default())?;
        self.state.record(&AuditEntry::dataset_reset(cleared));

        warn!("Reset all data ({} transactions removed)", cleared);
        Ok(cleared)
    }

    /// Swap in a new transaction list and settings, on disk and in memory
    ///
    /// On a failed write both are left as they were.
    fn replace_dataset(&mut self, transactions: Vec<Transaction>, settings: Settings) -> TrackerResult<()> {
        let previous = self.state.store.transactions().to_vec();
        let previous_settings = std::mem::replace(&mut self.state.settings, settings);
        self.state.store.replace_all(transactions);

        if let Err(e) = self.state.persist_dataset(&previous) {
            self.state.store.replace_all(previous);
            self.state.settings = previous_settings;
            return Err(e);
        }
        Ok(())
    }

    /// Load the sample transactions into an empty store
    ///
    /// Returns how many were added; an existing dataset is left alone.
    pub fn seed_sample_data(&mut self) -> TrackerResult<usize> {
        if !self.state.store.is_empty() {
            info!("Store already has data; not seeding");
            return Ok(0);
        }

        let samples = sample_transactions();
        let count = samples.len();
        self.state.store.replace_all(samples);
        self.state.persist_transactions()?;
        for txn in self.state.store.transactions() {
            self.state.record(&AuditEntry::transaction_created(txn));
        }

        info!("Seeded {} sample transactions", count);
        Ok(count)
    }
}

/// The three sample expenses, newest first
pub fn sample_transactions() -> Vec<Transaction> {
    let samples = [
        ("txn_1", "Lunch at cafeteria", "Food", -450, (2025, 1, 15)),
        ("txn_2", "Chemistry textbook", "Books", -2500, (2025, 1, 10)),
        ("txn_3", "Monthly bus pass", "Transport", -1500, (2025, 1, 5)),
    ];

    let now = Utc::now();
    samples
        .into_iter()
        .filter_map(|(id, description, category, units, (y, m, d))| {
            let id: TransactionId = id.parse().ok()?;
            let mut txn = Transaction::new(TransactionDraft {
                description: description.to_string(),
                category: category.to_string(),
                amount: Money::from_units(units),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
            });
            txn.id = id;
            txn.created_at = now;
            txn.updated_at = now;
            Some(txn)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::TrackerPaths;
    use crate::export::FullExport;
    use crate::models::Currency;
    use crate::services::TransactionService;
    use crate::validation::TransactionForm;
    use tempfile::TempDir;

    fn create_test_state() -> (TempDir, AppState) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let state = AppState::load(paths).unwrap();
        (temp_dir, state)
    }

    #[test]
    fn test_seed_only_when_empty() {
        let (_temp_dir, mut state) = create_test_state();
        assert_eq!(DataService::new(&mut state).seed_sample_data().unwrap(), 3);
        assert_eq!(DataService::new(&mut state).seed_sample_data().unwrap(), 0);

        let stats = state.store.calculate_budget_stats(state.settings.monthly_budget_limit);
        assert_eq!(stats.total_expenses, Money::from_units(-4450));
        assert_eq!(stats.remaining, Money::from_units(15_550));
        assert_eq!(stats.top_category, "Books");
        assert_eq!(state.storage().load_transactions().len(), 3);
    }

    #[test]
    fn test_export_import_round_trip() {
        let (_temp_dir, mut source) = create_test_state();
        DataService::new(&mut source).seed_sample_data().unwrap();
        source.settings.base_currency = Currency::RWF;
        source.settings.custom_categories.push("Rent".into());
        let json = serde_json::to_string(&FullExport::from_state(&source)).unwrap();

        let (_other_dir, mut target) = create_test_state();
        TransactionService::new(&mut target)
            .create(&TransactionForm::new("Coffee", "Food", "100", "2025-02-01"))
            .unwrap();

        let summary = DataService::new(&mut target).import_json(&json).unwrap();
        assert_eq!(summary, ImportSummary { replaced: 1, imported: 3 });
        assert_eq!(target.store.transactions(), source.store.transactions());
        assert_eq!(target.settings, source.settings);
        assert_eq!(target.storage().load_settings(), source.settings);
    }

    #[test]
    fn test_failed_import_changes_nothing() {
        let (_temp_dir, mut state) = create_test_state();
        DataService::new(&mut state).seed_sample_data().unwrap();
        let before = state.store.transactions().to_vec();

        assert!(DataService::new(&mut state)
            .import_json(r#"{"transactions": "nope"}"#)
            .is_err());
        let bad_rates = r#"{"transactions": [], "settings": {"exchangeRates": {"USD": 0}}}"#;
        assert!(DataService::new(&mut state).import_json(bad_rates).is_err());

        assert_eq!(state.store.transactions(), before.as_slice());
        assert_eq!(state.storage().load_transactions(), before);
    }

    #[test]
    fn test_import_with_unwritable_settings_keeps_old_data() {
        let (_temp_dir, mut state) = create_test_state();
        DataService::new(&mut state).seed_sample_data().unwrap();
        let before = state.store.transactions().to_vec();
        let settings_before = state.settings.clone();

        std::fs::create_dir_all(state.storage().paths().settings_file()).unwrap();
        let document = r#"{"transactions": [], "settings": {"baseCurrency": "USD"}}"#;
        assert!(DataService::new(&mut state).import_json(document).is_err());

        assert_eq!(state.store.transactions(), before.as_slice());
        assert_eq!(state.settings, settings_before);
        assert_eq!(state.storage().load_transactions(), before);
        let imports = state
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .filter(|e| e.operation == Operation::Import)
            .count();
        assert_eq!(imports, 0);
    }

    #[test]
    fn test_reset() {
        let (_temp_dir, mut state) = create_test_state();
        DataService::new(&mut state).seed_sample_data().unwrap();
        state.settings.base_currency = Currency::USD;

        assert_eq!(DataService::new(&mut state).reset().unwrap(), 3);
        assert!(state.store.is_empty());
        assert_eq!(state.settings, Settings::default());
        assert!(state.storage().load_transactions().is_empty());

        let last = state.audit().read_recent(1).unwrap();
        assert_eq!(last[0].operation, Operation::Reset);
    }
}
