//! Transaction form validation
//!
//! Turns raw user input into a [`TransactionDraft`] or [`TransactionPatch`],
//! collecting one message per failing field.

use chrono::NaiveDate;

use super::{
    find_duplicate_words, has_double_spaces, validate_amount, validate_category, validate_date,
    validate_description,
};
use crate::error::FieldError;
use crate::models::{all_categories, Money, TransactionDraft, TransactionPatch};

/// Raw, unvalidated form input; `None` means the field was not supplied
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
}

impl TransactionForm {
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            category: Some(category.into()),
            amount: Some(amount.into()),
            date: Some(date.into()),
        }
    }

    /// Validate every supplied field
    ///
    /// `custom_categories` extends the default category list. Amounts are
    /// entered positive and stored negated.
    pub fn validate_patch(
        &self,
        custom_categories: &[String],
    ) -> Result<TransactionPatch, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut patch = TransactionPatch::default();

        if let Some(description) = &self.description {
            let mut valid = true;
            if !validate_description(description) || has_double_spaces(description) {
                errors.push(FieldError::new(
                    "description",
                    "Description cannot have leading/trailing spaces or double spaces",
                ));
                valid = false;
            }
            if let Some(duplicates) = find_duplicate_words(description) {
                errors.push(FieldError::new(
                    "description",
                    format!("Found duplicate words: {}", duplicates.join(", ")),
                ));
                valid = false;
            }
            if valid {
                patch.description = Some(description.clone());
            }
        }

        if let Some(category) = &self.category {
            if !validate_category(category) {
                errors.push(FieldError::new(
                    "category",
                    "Category can only contain letters, spaces, and hyphens",
                ));
            } else if !all_categories(custom_categories).contains(&category.as_str()) {
                errors.push(FieldError::new(
                    "category",
                    format!("Unknown category '{}'", category),
                ));
            } else {
                patch.category = Some(category.clone());
            }
        }

        if let Some(amount) = &self.amount {
            match parse_amount(amount) {
                Some(money) => patch.amount = Some(-money.abs()),
                None => errors.push(FieldError::new(
                    "amount",
                    "Amount must be a positive number with up to 2 decimal places",
                )),
            }
        }

        if let Some(date) = &self.date {
            match parse_date(date) {
                Some(date) => patch.date = Some(date),
                None => errors.push(FieldError::new(
                    "date",
                    "Please enter a valid date in YYYY-MM-DD format",
                )),
            }
        }

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }
}

fn parse_amount(raw: &str) -> Option<Money> {
    if !validate_amount(raw) {
        return None;
    }
    Money::parse(raw).ok()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !validate_date(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Validate a complete form for a new transaction
pub fn validate_transaction_form(
    form: &TransactionForm,
    custom_categories: &[String],
) -> Result<TransactionDraft, Vec<FieldError>> {
    let mut missing = Vec::new();
    for (field, value) in [
        ("description", &form.description),
        ("category", &form.category),
        ("amount", &form.amount),
        ("date", &form.date),
    ] {
        if value.is_none() {
            missing.push(FieldError::new(field, format!("The {} field is required", field)));
        }
    }
    if !missing.is_empty() {
        return Err(missing);
    }

    let patch = form.validate_patch(custom_categories)?;
    match (patch.description, patch.category, patch.amount, patch.date) {
        (Some(description), Some(category), Some(amount), Some(date)) => Ok(TransactionDraft {
            description,
            category,
            amount,
            date,
        }),
        // validate_patch fills every supplied field or reports an error for it
        _ => Err(vec![FieldError::new("form", "Incomplete transaction")]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_form_negates_amount() {
        let form = TransactionForm::new("Lunch at cafeteria", "Food", "450", "2025-01-15");
        let draft = validate_transaction_form(&form, &[]).unwrap();
        assert_eq!(draft.amount, Money::from_units(-450));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_collects_every_failing_field() {
        let form = TransactionForm::new(" bad", "Fo0d", "12.345", "2025-02-30");
        let errors = validate_transaction_form(&form, &[]).unwrap_err();
        assert_eq!(fields(&errors), vec!["description", "category", "amount", "date"]);
    }

    #[test]
    fn test_duplicate_words_message() {
        let form = TransactionForm::new("the the bus", "Transport", "100", "2025-01-05");
        let errors = validate_transaction_form(&form, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Found duplicate words: the");
    }

    #[test]
    fn test_double_space_rejected() {
        let form = TransactionForm::new("bus  pass", "Transport", "100", "2025-01-05");
        let errors = validate_transaction_form(&form, &[]).unwrap_err();
        assert_eq!(fields(&errors), vec!["description"]);
    }

    #[test]
    fn test_custom_category_accepted() {
        let custom = vec!["Rent".to_string()];
        let form = TransactionForm::new("January rent", "Rent", "15000", "2025-01-01");
        assert!(validate_transaction_form(&form, &custom).is_ok());
        assert!(validate_transaction_form(&form, &[]).is_err());
    }

    #[test]
    fn test_missing_fields_reported() {
        let form = TransactionForm {
            description: Some("Snacks".into()),
            ..Default::default()
        };
        let errors = validate_transaction_form(&form, &[]).unwrap_err();
        assert_eq!(fields(&errors), vec!["category", "amount", "date"]);
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let form = TransactionForm {
            amount: Some("99.90".into()),
            ..Default::default()
        };
        let patch = form.validate_patch(&[]).unwrap();
        assert_eq!(patch.amount, Some(Money::from_cents(-9990)));
        assert!(patch.description.is_none());
        assert!(patch.date.is_none());
    }
}
