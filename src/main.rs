use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use finance_tracker::cli::{
    handle_category_command, handle_data_command, handle_settings_command,
    handle_transaction_command, CategoryCommands, DataCommands, SettingsCommands,
    TransactionCommands,
};
use finance_tracker::config::{TrackerPaths, DATA_DIR_ENV};
use finance_tracker::AppState;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal expense tracker with budgets and currency conversion",
    long_about = "Records expenses, checks spending against a monthly budget, and \
                  shows amounts in KES, RWF or USD. Data lives in local JSON files."
)]
struct Cli {
    /// Base directory for data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log level for diagnostics on stderr (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Settings commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    #[command(flatten)]
    Data(DataCommands),

    /// Show the data directory in use
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    trace!("Using paths {:?}", paths);

    let Some(command) = cli.command else {
        println!("fintrack - personal expense tracker");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        return Ok(());
    };

    if let Commands::Config = command {
        println!("Base directory: {}", paths.base_dir().display());
        println!("Transactions:   {}", paths.transactions_file().display());
        println!("Settings:       {}", paths.settings_file().display());
        println!("Audit log:      {}", paths.audit_log().display());
        return Ok(());
    }

    let mut state = AppState::load(paths)?;

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut state, cmd)?,
        Commands::Settings(cmd) => handle_settings_command(&mut state, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut state, cmd)?,
        Commands::Data(cmd) => handle_data_command(&mut state, cmd)?,
        Commands::Config => {}
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `level` applies to this crate only
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "finance_tracker={},{}={}",
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
