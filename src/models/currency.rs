//! Supported currencies and display conversion
//!
//! All amounts are stored in KES. Display converts using the rate table,
//! where a rate means "1 KES = rate units of the target currency".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::validation::validate_exchange_rate;

/// The closed set of currencies the tracker can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    /// Kenyan shilling, the storage currency
    #[default]
    KES,
    /// Rwandan franc
    RWF,
    /// US dollar
    USD,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::KES, Currency::RWF, Currency::USD];

    pub fn code(&self) -> &'static str {
        match self {
            Self::KES => "KES",
            Self::RWF => "RWF",
            Self::USD => "USD",
        }
    }

    /// Display symbol used as the amount prefix
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::KES => "Ksh",
            Self::RWF => "RWF",
            Self::USD => "$",
        }
    }

    /// Format an already-converted, non-negative amount in this currency
    fn render(&self, amount: Money) -> String {
        match self {
            Self::USD => format!("{}{}", self.symbol(), amount.format_grouped()),
            _ => format!("{} {}", self.symbol(), amount.format_grouped()),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KES" => Ok(Self::KES),
            "RWF" => Ok(Self::RWF),
            "USD" => Ok(Self::USD),
            other => Err(format!(
                "Unsupported currency '{}' (expected KES, RWF or USD)",
                other
            )),
        }
    }
}

/// Rate table keyed by target currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRates(BTreeMap<Currency, f64>);

impl ExchangeRates {
    pub fn new(rates: BTreeMap<Currency, f64>) -> Self {
        let mut rates = Self(rates);
        rates.pin_base();
        rates
    }

    /// Rate for a currency; KES is always 1
    pub fn get(&self, currency: Currency) -> Option<f64> {
        if currency == Currency::KES {
            return Some(1.0);
        }
        self.0.get(&currency).copied()
    }

    pub fn set(&mut self, currency: Currency, rate: f64) {
        if currency != Currency::KES {
            self.0.insert(currency, rate);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.0.iter().map(|(c, r)| (*c, *r))
    }

    /// Re-insert the fixed KES entry
    pub(crate) fn pin_base(&mut self) {
        self.0.insert(Currency::KES, 1.0);
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::new(BTreeMap::from([
            (Currency::KES, 1.0),
            (Currency::RWF, 12.5),
            (Currency::USD, 0.0078),
        ]))
    }
}

/// Convert a stored KES amount into a display string in `base`
///
/// The sign is dropped. When the rate for `base` is missing or unusable the
/// KES rendering is returned instead.
pub fn format_currency(amount: Money, base: Currency, rates: &ExchangeRates) -> String {
    let absolute = amount.abs();

    if base == Currency::KES {
        return Currency::KES.render(absolute);
    }

    match rates.get(base).filter(|rate| validate_exchange_rate(*rate)) {
        Some(rate) => {
            let converted = Money::from_cents((absolute.cents() as f64 * rate).round() as i64);
            base.render(converted)
        }
        None => Currency::KES.render(absolute),
    }
}
