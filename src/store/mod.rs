//! In-memory transaction store
//!
//! Holds the ordered transaction list (newest insert first) along with the
//! current search and sort used to build the visible list. The store never
//! validates input and never persists; callers in `services` do both.

pub mod sort;
pub mod stats;

pub use sort::{locale_compare, sort_transactions, SortDirection, SortField, SortKey};
pub use stats::{BudgetAlert, BudgetStats};

use lazy_regex::Regex;
use tracing::debug;

use crate::models::{Money, Transaction, TransactionDraft, TransactionId, TransactionPatch};
use crate::validation::safe_regex_compile;

#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    current_search: String,
    current_sort: SortKey,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store over an already-ordered list
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            ..Self::default()
        }
    }

    /// All transactions in stored order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Assign an id and timestamps, then insert at the front
    pub fn add(&mut self, draft: TransactionDraft) -> Transaction {
        let txn = Transaction::new(draft);
        debug!("Adding transaction {}", txn.id);
        self.transactions.insert(0, txn.clone());
        txn
    }

    /// Merge `patch` into the matching transaction; `None` if absent
    pub fn update(&mut self, id: &TransactionId, patch: TransactionPatch) -> Option<Transaction> {
        let txn = self.transactions.iter_mut().find(|t| &t.id == id)?;
        txn.apply(patch);
        debug!("Updated transaction {}", txn.id);
        Some(txn.clone())
    }

    /// Remove the matching transaction; a missing id is a no-op
    pub fn delete(&mut self, id: &TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| &t.id == id)?;
        debug!("Deleting transaction {}", id);
        Some(self.transactions.remove(index))
    }

    /// Swap in a whole new list (import and reset)
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    pub fn current_search(&self) -> &str {
        &self.current_search
    }

    pub fn current_sort(&self) -> SortKey {
        self.current_sort
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.current_sort = key;
    }

    /// Filter by a free-text pattern
    ///
    /// A blank query clears the stored search and returns everything. A
    /// malformed pattern also returns everything and leaves the stored search
    /// as it was.
    pub fn search(&mut self, query: &str) -> Vec<Transaction> {
        if query.trim().is_empty() {
            self.current_search.clear();
            return self.transactions.clone();
        }

        let Some(regex) = safe_regex_compile(query) else {
            return self.transactions.clone();
        };

        self.current_search = query.to_string();
        filter_matching(&self.transactions, &regex)
    }

    /// Sort a list by `key` and remember it as the current sort
    pub fn sort(&mut self, transactions: &[Transaction], key: SortKey) -> Vec<Transaction> {
        self.current_sort = key;
        sort_transactions(transactions, key)
    }

    /// The visible list: current search applied, then current sort
    pub fn view(&self) -> Vec<Transaction> {
        let regex = if self.current_search.trim().is_empty() {
            None
        } else {
            safe_regex_compile(&self.current_search)
        };
        let filtered = match regex {
            Some(regex) => filter_matching(&self.transactions, &regex),
            None => self.transactions.clone(),
        };
        sort_transactions(&filtered, self.current_sort)
    }

    pub fn calculate_budget_stats(&self, monthly_budget: Money) -> BudgetStats {
        BudgetStats::calculate(&self.transactions, monthly_budget)
    }
}

fn matches(regex: &Regex, txn: &Transaction) -> bool {
    regex.is_match(&txn.description)
        || regex.is_match(&txn.category)
        || regex.is_match(&txn.amount.to_plain_string())
}

fn filter_matching(transactions: &[Transaction], regex: &Regex) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| matches(regex, t))
        .cloned()
        .collect()
}
