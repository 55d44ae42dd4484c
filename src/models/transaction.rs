//! Transaction model
//!
//! A transaction is a single expense. Amounts are stored non-positive in the
//! base currency (KES); the sign carries no meaning beyond "this is an
//! expense".

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// The caller-supplied fields of a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub category: String,
    pub amount: Money,
    pub date: NaiveDate,
}

/// A partial update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }
}

impl From<TransactionDraft> for TransactionPatch {
    fn from(draft: TransactionDraft) -> Self {
        Self {
            description: Some(draft.description),
            category: Some(draft.category),
            amount: Some(draft.amount),
            date: Some(draft.date),
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    pub description: String,

    pub category: String,

    /// Amount in base currency (non-positive for expenses)
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh id and timestamps
    pub fn new(draft: TransactionDraft) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            description: draft.description,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this transaction and refresh `updated_at`
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        // Clock skew must never put updated_at before created_at.
        self.updated_at = Utc::now().max(self.created_at);
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}
