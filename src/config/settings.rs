//! User settings for the finance tracker
//!
//! Display currency, monthly budget limit, user-added categories and the
//! exchange-rate table. Updates are shallow merges through [`SettingsUpdate`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{Currency, ExchangeRates, Money};
use crate::storage::file_io::{read_json, write_json_atomic};

fn default_budget_limit() -> Money {
    Money::from_units(20_000)
}

/// User settings
///
/// Missing fields in a stored document fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Currency amounts are displayed in
    #[serde(default)]
    pub base_currency: Currency,

    /// Monthly spending limit, in KES
    #[serde(default = "default_budget_limit")]
    pub monthly_budget_limit: Money,

    /// Categories added on top of the defaults
    #[serde(default)]
    pub custom_categories: Vec<String>,

    #[serde(default)]
    pub exchange_rates: ExchangeRates,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: Currency::default(),
            monthly_budget_limit: default_budget_limit(),
            custom_categories: Vec::new(),
            exchange_rates: ExchangeRates::default(),
        }
    }
}

/// A partial settings change; `None` leaves the field as it is
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default)]
    pub base_currency: Option<Currency>,
    #[serde(default)]
    pub monthly_budget_limit: Option<Money>,
    #[serde(default)]
    pub custom_categories: Option<Vec<String>>,
    /// Replaces the whole table
    #[serde(default)]
    pub exchange_rates: Option<ExchangeRates>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.base_currency.is_none()
            && self.monthly_budget_limit.is_none()
            && self.custom_categories.is_none()
            && self.exchange_rates.is_none()
    }
}

impl Settings {
    /// Shallow-merge an update; the rate table is replaced, then KES re-pinned
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(currency) = update.base_currency {
            self.base_currency = currency;
        }
        if let Some(limit) = update.monthly_budget_limit {
            self.monthly_budget_limit = limit;
        }
        if let Some(categories) = update.custom_categories {
            self.custom_categories = categories;
        }
        if let Some(rates) = update.exchange_rates {
            self.exchange_rates = rates;
        }
        self.exchange_rates.pin_base();
    }

    /// Format a stored amount in the configured display currency
    pub fn format_amount(&self, amount: Money) -> String {
        crate::models::format_currency(amount, self.base_currency, &self.exchange_rates)
    }

    /// Load settings from disk
    ///
    /// A missing file gives the defaults. An unreadable or malformed file also
    /// gives the defaults, with a warning.
    pub fn load_or_create(paths: &TrackerPaths) -> Self {
        match read_json::<Settings, _>(paths.settings_file()) {
            Ok(mut settings) => {
                settings.exchange_rates.pin_base();
                settings
            }
            Err(e) => {
                warn!("Falling back to default settings: {}", e);
                Settings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
