//! Settings and category CLI commands

use clap::Subcommand;

use crate::config::settings::SettingsUpdate;
use crate::display::{format_category_list, format_settings};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Currency, Money};
use crate::services::SettingsService;
use crate::state::AppState;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Change one or more settings
    Set {
        /// Display currency (KES, RWF or USD)
        #[arg(long)]
        currency: Option<Currency>,
        /// Monthly budget limit in KES
        #[arg(long, allow_negative_numbers = true)]
        budget: Option<String>,
        /// RWF per 1 KES
        #[arg(long, allow_negative_numbers = true)]
        rwf_rate: Option<f64>,
        /// USD per 1 KES
        #[arg(long, allow_negative_numbers = true)]
        usd_rate: Option<f64>,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List default and custom categories
    List,
    /// Add a custom category
    Add {
        /// Category name (letters, spaces and hyphens)
        name: String,
    },
}

pub fn handle_settings_command(state: &mut AppState, cmd: SettingsCommands) -> TrackerResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(&state.settings));
        }
        SettingsCommands::Set {
            currency,
            budget,
            rwf_rate,
            usd_rate,
        } => {
            let monthly_budget_limit = budget
                .map(|raw| {
                    Money::parse(raw.trim()).map_err(|_| {
                        TrackerError::Validation(format!("Invalid budget amount: '{}'", raw))
                    })
                })
                .transpose()?;

            let exchange_rates = if rwf_rate.is_some() || usd_rate.is_some() {
                let mut rates = state.settings.exchange_rates.clone();
                if let Some(rate) = rwf_rate {
                    rates.set(Currency::RWF, rate);
                }
                if let Some(rate) = usd_rate {
                    rates.set(Currency::USD, rate);
                }
                Some(rates)
            } else {
                None
            };

            let update = SettingsUpdate {
                base_currency: currency,
                monthly_budget_limit,
                custom_categories: None,
                exchange_rates,
            };
            if update.is_empty() {
                return Err(TrackerError::Validation("Nothing to update".into()));
            }

            let mut service = SettingsService::new(state);
            let settings = service.update(update)?;
            println!("Settings updated");
            print!("{}", format_settings(settings));
        }
    }

    Ok(())
}

pub fn handle_category_command(state: &mut AppState, cmd: CategoryCommands) -> TrackerResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&state.settings));
        }
        CategoryCommands::Add { name } => {
            let name = SettingsService::new(state).add_category(&name)?;
            println!("Added category: {}", name);
        }
    }

    Ok(())
}
