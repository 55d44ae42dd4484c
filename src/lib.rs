//! Finance tracker - personal expense tracking from the command line
//!
//! Records expenses in KES, tracks them against a monthly budget and shows
//! amounts in KES, RWF or USD. All data lives in local JSON files.
//!
//! # Architecture
//!
//! - `validation`: field rules, duplicate-word detection, safe search patterns
//! - `models`: transactions, money, currencies and categories
//! - `store`: the in-memory list with search, sort and budget statistics
//! - `config`: data directory resolution and user settings
//! - `storage`: JSON file persistence with atomic writes
//! - `audit`: append-only log of every change
//! - `services`: one user action each (validate, mutate, persist, audit)
//! - `export`: JSON, CSV and YAML export plus JSON import
//! - `display`, `cli`: terminal rendering and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::{AppState, TrackerPaths, TransactionService};
//! use finance_tracker::validation::TransactionForm;
//!
//! let mut state = AppState::load(TrackerPaths::new()?)?;
//! let form = TransactionForm::new("Lunch at cafeteria", "Food", "450", "2025-01-15");
//! let txn = TransactionService::new(&mut state).create(&form)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
pub mod validation;

pub use config::{Settings, SettingsUpdate, TrackerPaths};
pub use error::{FieldError, TrackerError, TrackerResult};
pub use services::{DataService, SettingsService, TransactionService};
pub use state::AppState;
pub use store::{BudgetStats, TransactionStore};
