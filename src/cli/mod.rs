//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod data;
pub mod settings;
pub mod transaction;

pub use data::{handle_data_command, DataCommands, ExportFormat};
pub use settings::{handle_category_command, handle_settings_command, CategoryCommands, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
