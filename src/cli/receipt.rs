//! Receipt commands for the active person

use clap::Subcommand;

use super::active_name;
use crate::config::Settings;
use crate::display;
use crate::error::{SpeseError, SpeseResult};
use crate::models::{Ledger, Money};
use crate::services::ReceiptService;

/// Receipt subcommands
#[derive(Debug, Subcommand)]
pub enum ReceiptCommands {
    /// Add a receipt manually
    Add {
        /// Total amount (must be greater than zero)
        total: String,
        /// Store name (optional, may span multiple words)
        #[arg(num_args = 0..)]
        store: Vec<String>,
    },

    /// Remove a receipt by its list position
    Remove {
        /// Position as shown by 'receipt list' (1-based)
        index: usize,
    },

    /// List receipts
    List,

    /// Show a receipt with its line items
    Show {
        /// Position as shown by 'receipt list' (1-based)
        index: usize,
    },
}

/// Handle a receipt command
pub fn handle_receipt_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ReceiptCommands,
) -> SpeseResult<()> {
    let name = active_name(ledger)?;
    let symbol = &settings.currency_symbol;

    match cmd {
        ReceiptCommands::Add { total, store } => {
            let total = Money::parse(&total)
                .map_err(|e| SpeseError::Validation(e.to_string()))?;
            let store = if store.is_empty() {
                None
            } else {
                Some(store.join(" "))
            };

            let receipt =
                ReceiptService::new(ledger).add_manual(&name, store.as_deref(), total)?;
            println!(
                "Added receipt: {} - {}",
                receipt.negozio,
                receipt.totale.format_with_symbol(symbol)
            );
        }
        ReceiptCommands::Remove { index } => {
            let removed = match index.checked_sub(1) {
                Some(zero_based) => ReceiptService::new(ledger).remove(&name, zero_based)?,
                None => false,
            };
            if removed {
                println!("Removed receipt {}.", index);
            } else {
                println!("No receipt at position {}.", index);
            }
        }
        ReceiptCommands::List => {
            let person = ledger
                .person(&name)
                .ok_or_else(|| SpeseError::person_not_found(&name))?;
            print!("{}", display::format_receipt_table(&person.scontrini, symbol));
        }
        ReceiptCommands::Show { index } => {
            let person = ledger
                .person(&name)
                .ok_or_else(|| SpeseError::person_not_found(&name))?;
            match index.checked_sub(1).and_then(|i| person.scontrini.get(i)) {
                Some(receipt) => {
                    print!("{}", display::format_receipt_details(receipt, symbol))
                }
                None => println!("No receipt at position {}.", index),
            }
        }
    }

    Ok(())
}
