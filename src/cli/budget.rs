//! Budget commands for the active person

use clap::Subcommand;

use super::active_name;
use crate::config::Settings;
use crate::error::{SpeseError, SpeseResult};
use crate::models::{Ledger, Money};
use crate::services::PersonService;

/// Budget subcommands
#[derive(Debug, Subcommand)]
pub enum BudgetCommands {
    /// Set the budget limit (e.g. "100" or "100.50")
    Limit {
        /// Amount in currency units
        amount: String,
    },

    /// Remove the budget limit entirely
    Unlimited,

    /// Re-enable the budget limit
    Limited,
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpeseResult<()> {
    let name = active_name(ledger)?;

    match cmd {
        BudgetCommands::Limit { amount } => {
            let limit = Money::parse(&amount)
                .map_err(|e| SpeseError::Validation(e.to_string()))?;
            PersonService::new(ledger).set_limit(&name, limit)?;
            println!(
                "Budget limit for {} set to {}.",
                name,
                limit.format_with_symbol(&settings.currency_symbol)
            );
        }
        BudgetCommands::Unlimited => {
            PersonService::new(ledger).set_no_limit(&name, true)?;
            println!("{} now has no budget limit.", name);
        }
        BudgetCommands::Limited => {
            PersonService::new(ledger).set_no_limit(&name, false)?;
            let limit = ledger
                .person(&name)
                .map(|p| p.limite)
                .unwrap_or_default();
            println!(
                "Budget limit for {} re-enabled at {}.",
                name,
                limit.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
