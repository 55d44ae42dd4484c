//! CSV export of transactions

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

const HEADER: [&str; 5] = ["ID", "Date", "Description", "Category", "Amount"];

/// Write transactions as `ID,Date,Description,Category,Amount`
///
/// Amounts are in KES with two decimals.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for txn in transactions {
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.to_string();
        csv_writer
            .write_record([
                txn.id.as_str(),
                date.as_str(),
                txn.description.as_str(),
                txn.category.as_str(),
                amount.as_str(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
