//! Expense categories
//!
//! A fixed set of default categories is always available; users may add their
//! own custom categories, kept in insertion order in the settings.

use std::fmt;

use crate::validation::validate_category;

/// Categories every tracker starts with
pub const DEFAULT_CATEGORIES: [&str; 6] =
    ["Food", "Books", "Transport", "Entertainment", "Fees", "Other"];

/// Check whether a name is one of the default categories (exact match)
pub fn is_default_category(name: &str) -> bool {
    DEFAULT_CATEGORIES.contains(&name)
}

/// Defaults followed by custom categories, in display order
pub fn all_categories(custom: &[String]) -> Vec<&str> {
    DEFAULT_CATEGORIES
        .iter()
        .copied()
        .chain(custom.iter().map(String::as_str))
        .collect()
}

/// Check that `name` may be added as a new custom category
///
/// Expects an already-trimmed name. Duplicate detection is case-sensitive.
pub fn validate_new_category(name: &str, custom: &[String]) -> Result<(), CategoryValidationError> {
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if !validate_category(name) {
        return Err(CategoryValidationError::InvalidName(name.to_string()));
    }

    if all_categories(custom).contains(&name) {
        return Err(CategoryValidationError::AlreadyExists(name.to_string()));
    }

    Ok(())
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    InvalidName(String),
    AlreadyExists(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter a category name"),
            Self::InvalidName(_) => {
                write!(f, "Category can only contain letters, spaces, and hyphens")
            }
            Self::AlreadyExists(name) => write!(f, "Category already exists: {}", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
