//! Export, import, reset and history commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::{TrackerError, TrackerResult};
use crate::export::{default_file_name, export_full_json, export_full_yaml, export_transactions_csv};
use crate::services::DataService;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full document, accepted back by `import`
    Json,
    /// Transactions only
    Csv,
    /// Full document, human-readable
    Yaml,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Yaml => "yaml",
        }
    }
}

#[derive(Subcommand)]
pub enum DataCommands {
    /// Export all data
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file ("-" for stdout); defaults to finance-export-<date>.<ext>
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all data with an exported JSON document
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Delete all transactions and restore default settings
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Load sample transactions into an empty tracker
    Seed,
    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn write_export<W: Write>(state: &AppState, format: ExportFormat, writer: &mut W) -> TrackerResult<()> {
    match format {
        ExportFormat::Json => export_full_json(state, writer),
        ExportFormat::Csv => export_transactions_csv(state.store.transactions(), &mut *writer),
        ExportFormat::Yaml => export_full_yaml(state, writer),
    }
}

pub fn handle_data_command(state: &mut AppState, cmd: DataCommands) -> TrackerResult<()> {
    match cmd {
        DataCommands::Export { format, output } => {
            let path = output.unwrap_or_else(|| {
                let today = chrono::Local::now().date_naive();
                PathBuf::from(default_file_name(today)).with_extension(format.extension())
            });

            if path.as_os_str() == "-" {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_export(state, format, &mut handle)?;
            } else {
                let file = File::create(&path).map_err(|e| {
                    TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                write_export(state, format, &mut writer)?;
                writer
                    .flush()
                    .map_err(|e| TrackerError::Export(e.to_string()))?;
                println!(
                    "Exported {} transactions to {}",
                    state.store.len(),
                    path.display()
                );
            }
        }

        DataCommands::Import { file } => {
            let contents = std::fs::read_to_string(&file).map_err(|e| {
                TrackerError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let summary = DataService::new(state).import_json(&contents)?;
            println!(
                "Imported {} transactions (replaced {})",
                summary.imported, summary.replaced
            );
        }

        DataCommands::Reset { force } => {
            if !force {
                println!(
                    "This will permanently delete {} transactions and restore default settings.",
                    state.store.len()
                );
                println!("Re-run with --force to reset.");
                return Ok(());
            }
            let cleared = DataService::new(state).reset()?;
            println!("All data cleared ({} transactions removed)", cleared);
        }

        DataCommands::Seed => {
            let added = DataService::new(state).seed_sample_data()?;
            if added == 0 {
                println!("Tracker already has transactions; nothing seeded");
            } else {
                println!("Added {} sample transactions", added);
            }
        }

        DataCommands::History { limit } => {
            let entries = state.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No history yet.");
            }
            for entry in entries.iter().rev() {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
