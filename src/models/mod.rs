//! Core data models for the finance tracker
//!
//! This module contains the data structures of the expense domain:
//! transactions, amounts, currencies and categories.

pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{
    all_categories, is_default_category, validate_new_category, CategoryValidationError,
    DEFAULT_CATEGORIES,
};
pub use currency::{format_currency, Currency, ExchangeRates};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionDraft, TransactionPatch};
