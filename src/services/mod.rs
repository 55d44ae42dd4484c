//! Service layer for the finance tracker
//!
//! Each service borrows the [`AppState`](crate::state::AppState) mutably and
//! runs one user action: validate, mutate, persist, audit.

pub mod data;
pub mod settings;
pub mod transaction;

pub use data::{sample_transactions, DataService, ImportSummary};
pub use settings::SettingsService;
pub use transaction::TransactionService;
