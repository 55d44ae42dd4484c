//! Budget dashboard and settings display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::{all_categories, is_default_category, Currency};
use crate::store::{BudgetAlert, BudgetStats};

fn percent_suffix(percent: Option<f64>) -> String {
    percent
        .map(|p| format!(" ({:.1}%)", p))
        .unwrap_or_default()
}

/// One-line budget status
pub fn format_budget_alert(stats: &BudgetStats, settings: &Settings) -> String {
    match stats.alert() {
        BudgetAlert::Exceeded { by } => {
            format!("Budget exceeded by {}", settings.format_amount(by))
        }
        BudgetAlert::Low { remaining, percent } => format!(
            "Low budget: {} remaining{}",
            settings.format_amount(remaining),
            percent_suffix(percent)
        ),
        BudgetAlert::Normal { remaining, percent } => format!(
            "Budget status: {} remaining{}",
            settings.format_amount(remaining),
            percent_suffix(percent)
        ),
    }
}

/// The dashboard printed by `stats`
pub fn format_budget_summary(stats: &BudgetStats, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transactions:   {}\n", stats.transaction_count));
    output.push_str(&format!(
        "Total spent:    {}\n",
        settings.format_amount(stats.total_expenses)
    ));
    output.push_str(&format!(
        "Monthly budget: {}\n",
        settings.format_amount(stats.monthly_budget)
    ));
    let sign = if stats.remaining.is_negative() { "-" } else { "" };
    output.push_str(&format!(
        "Remaining:      {}{}\n",
        sign,
        settings.format_amount(stats.remaining)
    ));
    output.push_str(&format!("Top category:   {}\n", stats.top_category));
    output.push('\n');
    output.push_str(&format_budget_alert(stats, settings));
    output.push('\n');

    output
}

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Rate (per 1 KES)")]
    rate: String,
}

pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Display currency: {}\n", settings.base_currency));
    output.push_str(&format!(
        "Monthly budget:   {}\n",
        settings.format_amount(settings.monthly_budget_limit)
    ));
    let custom = if settings.custom_categories.is_empty() {
        "(none)".to_string()
    } else {
        settings.custom_categories.join(", ")
    };
    output.push_str(&format!("Custom categories: {}\n\n", custom));

    let rows = Currency::ALL.iter().map(|currency| RateRow {
        currency: currency.code().to_string(),
        rate: settings
            .exchange_rates
            .get(*currency)
            .map(|r| r.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    output
}

/// Defaults first, then custom categories marked as such
pub fn format_category_list(settings: &Settings) -> String {
    all_categories(&settings.custom_categories)
        .into_iter()
        .map(|name| {
            if is_default_category(name) {
                format!("  {}\n", name)
            } else {
                format!("  {} (custom)\n", name)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionDraft};
    use chrono::NaiveDate;

    fn spent(units: i64) -> Vec<Transaction> {
        vec![Transaction::new(TransactionDraft {
            description: "Textbooks".into(),
            category: "Books".into(),
            amount: Money::from_units(units),
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        })]
    }

    fn stats_for(units: i64) -> BudgetStats {
        BudgetStats::calculate(&spent(units), Money::from_units(20_000))
    }

    #[test]
    fn test_alert_messages() {
        let settings = Settings::default();
        assert_eq!(
            format_budget_alert(&stats_for(-25_000), &settings),
            "Budget exceeded by Ksh 5,000.00"
        );
        assert_eq!(
            format_budget_alert(&stats_for(-19_000), &settings),
            "Low budget: Ksh 1,000.00 remaining (5.0%)"
        );
        assert_eq!(
            format_budget_alert(&stats_for(-5_000), &settings),
            "Budget status: Ksh 15,000.00 remaining (75.0%)"
        );
    }

    #[test]
    fn test_summary_shows_negative_remaining() {
        let output = format_budget_summary(&stats_for(-25_000), &Settings::default());
        assert!(output.contains("Remaining:      -Ksh 5,000.00"));
        assert!(output.contains("Top category:   Books"));
        assert!(output.contains("Transactions:   1"));
    }

    #[test]
    fn test_settings_table() {
        let output = format_settings(&Settings::default());
        assert!(output.contains("Display currency: KES"));
        assert!(output.contains("Ksh 20,000.00"));
        assert!(output.contains("12.5"));
        assert!(output.contains("0.0078"));
    }

    #[test]
    fn test_category_list_marks_custom() {
        let mut settings = Settings::default();
        settings.custom_categories.push("Rent".into());
        let output = format_category_list(&settings);
        assert!(output.starts_with("  Food\n"));
        assert!(output.ends_with("  Rent (custom)\n"));
        assert!(!output.contains("Fees (custom)"));
    }
}
