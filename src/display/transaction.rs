//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::Transaction;
use crate::validation::highlight_matches;

/// Markers placed around search matches
pub const HIGHLIGHT_OPEN: &str = "[";
pub const HIGHLIGHT_CLOSE: &str = "]";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn mark(text: &str, query: Option<&str>) -> String {
    match query {
        Some(q) => highlight_matches(text, q, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE),
        None => text.to_string(),
    }
}

/// Render transactions as a table, amounts in the display currency
///
/// Description and category matches of `query` are bracketed.
pub fn format_transaction_table(
    transactions: &[Transaction],
    settings: &Settings,
    query: Option<&str>,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.short().to_string(),
        date: txn.date.format("%Y-%m-%d").to_string(),
        description: mark(&txn.description, query),
        category: mark(&txn.category, query),
        amount: settings.format_amount(txn.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Amount:      {}\n", settings.format_amount(txn.amount)));
    if settings.base_currency != crate::models::Currency::KES {
        output.push_str(&format!("Stored:      KES {}\n", txn.amount));
    }
    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "Updated:     {}\n",
        txn.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
