//! CLI command handlers
//!
//! This module contains the implementation of session commands, bridging
//! clap argument parsing with the service layer.

pub mod backup;
pub mod budget;
pub mod extract;
pub mod person;
pub mod receipt;

pub use backup::{handle_export, handle_import};
pub use budget::{handle_budget_command, BudgetCommands};
pub use extract::handle_extract;
pub use person::{handle_person_command, PersonCommands};
pub use receipt::{handle_receipt_command, ReceiptCommands};

use crate::error::{SpeseError, SpeseResult};
use crate::models::Ledger;

/// Resolve the active person's name, or explain how to get one
pub(crate) fn active_name(ledger: &Ledger) -> SpeseResult<String> {
    ledger
        .active_name()
        .map(str::to_string)
        .ok_or_else(|| {
            SpeseError::Validation(
                "No active person. Use 'person add <name>' or 'person select <name>' first."
                    .into(),
            )
        })
}
