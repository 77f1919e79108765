//! Person commands

use clap::Subcommand;

use crate::error::SpeseResult;
use crate::models::Ledger;
use crate::services::PersonService;

/// Person subcommands
#[derive(Debug, Subcommand)]
pub enum PersonCommands {
    /// Add a new person and make them active
    Add {
        /// Person name (may span multiple words)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Select the active person
    Select {
        /// Person name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List all people
    List,
}

/// Handle a person command
pub fn handle_person_command(ledger: &mut Ledger, cmd: PersonCommands) -> SpeseResult<()> {
    match cmd {
        PersonCommands::Add { name } => {
            let name = name.join(" ");
            PersonService::new(ledger).add(&name)?;
            println!("Added '{}' (now active).", name.trim());
        }
        PersonCommands::Select { name } => {
            let name = name.join(" ");
            PersonService::new(ledger).select(&name)?;
            println!("Active person: {}", name);
        }
        PersonCommands::List => {
            if ledger.is_empty() {
                println!("No people yet. Use 'person add <name>' to start.");
            } else {
                let active = ledger.active_name().map(str::to_string);
                for name in ledger.names() {
                    let marker = if Some(name) == active.as_deref() { "*" } else { " " };
                    println!("{} {} ({} receipts)", marker, name, ledger.person(name).map_or(0, |p| p.scontrini.len()));
                }
            }
        }
    }

    Ok(())
}
