//! Transaction service
//!
//! Validates form input, applies it to the store, persists the list and
//! appends an audit entry, in that order.

use tracing::info;

use crate::audit::AuditEntry;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionId};
use crate::state::AppState;
use crate::store::SortKey;
use crate::validation::{validate_transaction_form, TransactionForm};

/// Service for transaction management
pub struct TransactionService<'a> {
    state: &'a mut AppState,
}

impl<'a> TransactionService<'a> {
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    /// Add a transaction from a complete form
    pub fn create(&mut self, form: &TransactionForm) -> TrackerResult<Transaction> {
        let draft = validate_transaction_form(form, &self.state.settings.custom_categories)
            .map_err(TrackerError::FormValidation)?;

        let txn = self.state.store.add(draft);
        self.state.persist_transactions()?;
        self.state.record(&AuditEntry::transaction_created(&txn));

        info!("Created transaction {} ({})", txn.id, txn.description);
        Ok(txn)
    }

    /// Apply the supplied fields of `form` to an existing transaction
    pub fn update(&mut self, id: &TransactionId, form: &TransactionForm) -> TrackerResult<Transaction> {
        let patch = form
            .validate_patch(&self.state.settings.custom_categories)
            .map_err(TrackerError::FormValidation)?;

        if patch.is_empty() {
            return Err(TrackerError::Validation("Nothing to update".into()));
        }

        let before = self
            .state
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.as_str()))?;

        let after = self
            .state
            .store
            .update(id, patch)
            .ok_or_else(|| TrackerError::transaction_not_found(id.as_str()))?;

        self.state.persist_transactions()?;
        self.state
            .record(&AuditEntry::transaction_updated(&before, &after));

        info!("Updated transaction {}", after.id);
        Ok(after)
    }

    /// Remove a transaction
    ///
    /// The store treats a missing id as a no-op; here it is reported as not
    /// found and nothing is written.
    pub fn delete(&mut self, id: &TransactionId) -> TrackerResult<Transaction> {
        let removed = self
            .state
            .store
            .delete(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.as_str()))?;

        self.state.persist_transactions()?;
        self.state.record(&AuditEntry::transaction_deleted(&removed));

        info!("Deleted transaction {}", removed.id);
        Ok(removed)
    }

    /// Resolve a full id or a unique prefix of one (as shown in tables)
    pub fn resolve(&self, identifier: &str) -> TrackerResult<TransactionId> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(TrackerError::Validation("Transaction id cannot be empty".into()));
        }

        let transactions = self.state.store.transactions();
        if let Some(txn) = transactions.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(txn.id.clone());
        }

        let mut matches = transactions
            .iter()
            .filter(|t| t.id.as_str().starts_with(identifier));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn.id.clone()),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Ambiguous transaction id '{}'",
                identifier
            ))),
            (None, _) => Err(TrackerError::transaction_not_found(identifier)),
        }
    }

    pub fn get(&self, id: &TransactionId) -> TrackerResult<&Transaction> {
        self.state
            .store
            .get(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.as_str()))
    }

    /// The visible list for an optional search and sort
    ///
    /// Without a query every transaction is listed. A malformed query also
    /// lists everything.
    pub fn list(&mut self, query: Option<&str>, sort: Option<SortKey>) -> Vec<Transaction> {
        let sort = sort.unwrap_or_else(|| self.state.store.current_sort());
        let matching = self.state.store.search(query.unwrap_or(""));
        self.state.store.sort(&matching, sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_state() -> (TempDir, AppState) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let state = AppState::load(paths).unwrap();
        (temp_dir, state)
    }

    fn lunch_form() -> TransactionForm {
        TransactionForm::new("Lunch at cafeteria", "Food", "450", "2025-01-15")
    }

    #[test]
    fn test_create_persists_and_audits() {
        let (_temp_dir, mut state) = create_test_state();
        let txn = TransactionService::new(&mut state).create(&lunch_form()).unwrap();

        assert_eq!(txn.amount, Money::from_units(-450));
        assert_eq!(state.storage().load_transactions(), vec![txn.clone()]);

        let entries = state.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, txn.id.as_str());
    }

    #[test]
    fn test_create_succeeds_when_audit_log_is_unwritable() {
        let (_temp_dir, mut state) = create_test_state();
        std::fs::create_dir_all(state.audit().path()).unwrap();

        let txn = TransactionService::new(&mut state).create(&lunch_form()).unwrap();

        assert_eq!(state.storage().load_transactions(), vec![txn]);
    }

    #[test]
    fn test_create_rejects_invalid_form() {
        let (_temp_dir, mut state) = create_test_state();
        let form = TransactionForm::new("Lunch  break", "Food", "abc", "2025-01-15");

        let err = TransactionService::new(&mut state).create(&form).unwrap_err();
        match err {
            TrackerError::FormValidation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(state.store.is_empty());
        assert!(state.storage().load_transactions().is_empty());
    }

    #[test]
    fn test_update_changes_only_supplied_fields() {
        let (_temp_dir, mut state) = create_test_state();
        let mut service = TransactionService::new(&mut state);
        let txn = service.create(&lunch_form()).unwrap();

        let form = TransactionForm {
            amount: Some("500".into()),
            ..Default::default()
        };
        let updated = service.update(&txn.id, &form).unwrap();

        assert_eq!(updated.amount, Money::from_units(-500));
        assert_eq!(updated.description, "Lunch at cafeteria");
        let entries = state.audit().read_all().unwrap();
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("amount: -450 -> -500")
        );
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp_dir, mut state) = create_test_state();
        let mut service = TransactionService::new(&mut state);
        service.create(&lunch_form()).unwrap();

        let missing: TransactionId = "txn_missing".parse().unwrap();
        let form = TransactionForm {
            amount: Some("1".into()),
            ..Default::default()
        };
        assert!(service.update(&missing, &form).unwrap_err().is_not_found());
        assert_eq!(state.store.transactions()[0].amount, Money::from_units(-450));
    }

    #[test]
    fn test_update_with_empty_form_is_rejected() {
        let (_temp_dir, mut state) = create_test_state();
        let mut service = TransactionService::new(&mut state);
        let txn = service.create(&lunch_form()).unwrap();

        let err = service
            .update(&txn.id, &TransactionForm::default())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_then_delete_again() {
        let (_temp_dir, mut state) = create_test_state();
        let mut service = TransactionService::new(&mut state);
        let txn = service.create(&lunch_form()).unwrap();

        service.delete(&txn.id).unwrap();
        assert!(service.delete(&txn.id).unwrap_err().is_not_found());
        assert!(state.store.is_empty());
        assert!(state.storage().load_transactions().is_empty());
    }

    #[test]
    fn test_resolve_prefix() {
        let (_temp_dir, mut state) = create_test_state();
        let mut service = TransactionService::new(&mut state);
        let txn = service.create(&lunch_form()).unwrap();

        assert_eq!(service.resolve(txn.id.as_str()).unwrap(), txn.id);
        assert_eq!(service.resolve(txn.id.short()).unwrap(), txn.id);
        assert!(service.resolve("txn_zzzz").unwrap_err().is_not_found());

        service
            .create(&TransactionForm::new("Printing notes", "Fees", "30", "2025-01-12"))
            .unwrap();
        assert!(service.resolve("txn_").unwrap_err().is_validation());
    }

    #[test]
    fn test_list_with_search_and_sort() {
        let (_temp_dir, mut state) = create_test_state();
        let mut service = TransactionService::new(&mut state);
        service.create(&lunch_form()).unwrap();
        service
            .create(&TransactionForm::new("Monthly bus pass", "Transport", "1500", "2025-01-05"))
            .unwrap();
        service
            .create(&TransactionForm::new("Chemistry textbook", "Books", "2500", "2025-01-10"))
            .unwrap();

        let all = service.list(None, Some("amount-asc".parse().unwrap()));
        assert_eq!(all[0].description, "Chemistry textbook");

        let found = service.list(Some("bus"), None);
        assert_eq!(found.len(), 1);

        let fallback = service.list(Some("("), None);
        assert_eq!(fallback.len(), 3);
    }
}
