//! Display formatting for terminal output

pub mod summary;
pub mod transaction;

pub use summary::{format_budget_alert, format_budget_summary, format_category_list, format_settings};
pub use transaction::{format_transaction_details, format_transaction_table};
