//! Transaction CLI commands

use clap::Subcommand;

use crate::display::{format_budget_summary, format_transaction_details, format_transaction_table};
use crate::error::TrackerResult;
use crate::services::TransactionService;
use crate::state::AppState;
use crate::store::SortKey;
use crate::validation::TransactionForm;

#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent, positive (e.g. "450" or "12.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit an existing transaction
    Edit {
        /// Transaction ID or unique prefix
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unique prefix
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List transactions
    List {
        /// Filter by a search pattern (regular expressions allowed)
        #[arg(short, long, allow_hyphen_values = true)]
        search: Option<String>,
        /// Sort key: <date|amount|description|category>-<asc|desc>
        #[arg(long, default_value_t = SortKey::default())]
        sort: SortKey,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unique prefix
        id: String,
    },
    /// Show the budget summary
    Stats,
}

pub fn handle_transaction_command(state: &mut AppState, cmd: TransactionCommands) -> TrackerResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let date =
                date.unwrap_or_else(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());
            let form = TransactionForm::new(description, category, amount, date);

            let txn = TransactionService::new(state).create(&form)?;
            println!("Added transaction {}", txn.id);
            print!("{}", format_transaction_details(&txn, &state.settings));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let form = TransactionForm {
                description,
                category,
                amount,
                date,
            };
            let mut service = TransactionService::new(state);
            let id = service.resolve(&id)?;
            let txn = service.update(&id, &form)?;
            println!("Updated transaction {}", txn.id);
            print!("{}", format_transaction_details(&txn, &state.settings));
        }

        TransactionCommands::Delete { id, force } => {
            let mut service = TransactionService::new(state);
            let id = service.resolve(&id)?;

            if !force {
                let txn = service.get(&id)?;
                println!("Would delete: {}", txn);
                println!("Re-run with --force to delete it.");
                return Ok(());
            }

            let txn = service.delete(&id)?;
            println!("Deleted transaction {} ({})", txn.id, txn.description);
        }

        TransactionCommands::List {
            search,
            sort,
            limit,
        } => {
            let mut transactions = TransactionService::new(state).list(search.as_deref(), Some(sort));
            let matched = transactions.len();
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            let query = search.as_deref().filter(|q| !q.trim().is_empty());
            print!(
                "{}",
                format_transaction_table(&transactions, &state.settings, query)
            );
            if !transactions.is_empty() {
                println!(
                    "Showing {} of {} transactions ({} total)",
                    transactions.len(),
                    matched,
                    state.store.len()
                );
            }
        }

        TransactionCommands::Show { id } => {
            let service = TransactionService::new(state);
            let id = service.resolve(&id)?;
            let txn = service.get(&id)?.clone();
            print!("{}", format_transaction_details(&txn, &state.settings));
        }

        TransactionCommands::Stats => {
            let stats = state
                .store
                .calculate_budget_stats(state.settings.monthly_budget_limit);
            print!("{}", format_budget_summary(&stats, &state.settings));
        }
    }

    Ok(())
}
