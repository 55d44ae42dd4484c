//! Settings service
//!
//! Budget limit, display currency, exchange rates and custom categories.

use tracing::info;

use crate::audit::AuditEntry;
use crate::config::settings::{Settings, SettingsUpdate};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{validate_new_category, CategoryValidationError};
use crate::state::AppState;
use crate::validation::validate_exchange_rate;

/// Reject updates that would leave the settings unusable
pub(crate) fn check_update(update: &SettingsUpdate) -> TrackerResult<()> {
    if let Some(rates) = &update.exchange_rates {
        if rates.iter().any(|(_, rate)| !validate_exchange_rate(rate)) {
            return Err(TrackerError::Validation(
                "Please enter valid exchange rates".into(),
            ));
        }
    }

    if let Some(limit) = update.monthly_budget_limit {
        if limit.is_negative() {
            return Err(TrackerError::Validation(
                "Budget limit cannot be negative".into(),
            ));
        }
    }

    if let Some(categories) = &update.custom_categories {
        for (index, name) in categories.iter().enumerate() {
            validate_new_category(name, &categories[..index]).map_err(category_error)?;
        }
    }

    Ok(())
}

fn category_error(err: CategoryValidationError) -> TrackerError {
    match err {
        CategoryValidationError::AlreadyExists(name) => TrackerError::duplicate_category(name),
        other => TrackerError::Validation(other.to_string()),
    }
}

/// Service for settings management
pub struct SettingsService<'a> {
    state: &'a mut AppState,
}

impl<'a> SettingsService<'a> {
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }

    pub fn current(&self) -> &Settings {
        &self.state.settings
    }

    /// Merge `update` into the settings and persist them
    pub fn update(&mut self, update: SettingsUpdate) -> TrackerResult<&Settings> {
        check_update(&update)?;

        let before = self.state.settings.clone();
        self.state.settings.apply(update);
        self.state.persist_settings()?;
        self.state
            .record(&AuditEntry::settings_updated(&before, &self.state.settings));

        info!("Updated settings");
        Ok(&self.state.settings)
    }

    /// Add a custom category; `name` is trimmed first
    pub fn add_category(&mut self, name: &str) -> TrackerResult<String> {
        let name = name.trim();
        validate_new_category(name, &self.state.settings.custom_categories)
            .map_err(category_error)?;

        let mut categories = self.state.settings.custom_categories.clone();
        categories.push(name.to_string());
        self.update(SettingsUpdate {
            custom_categories: Some(categories),
            ..Default::default()
        })?;

        info!("Added category {}", name);
        Ok(name.to_string())
    }
}
