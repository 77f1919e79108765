//! Interactive session
//!
//! Holds the ledger in memory for the lifetime of one terminal session and
//! dispatches line-oriented commands. Nothing is persisted implicitly: the
//! ledger starts empty and only the explicit export/import commands touch
//! disk. A failing command is reported and the session continues.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli;
use crate::config::Settings;
use crate::display;
use crate::models::Ledger;
use crate::services::SummaryService;

#[derive(Parser)]
#[command(name = "spese", disable_version_flag = true)]
struct SessionCli {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Manage people
    #[command(subcommand)]
    Person(cli::PersonCommands),

    /// Budget settings for the active person
    #[command(subcommand)]
    Budget(cli::BudgetCommands),

    /// Manage the active person's receipts
    #[command(subcommand)]
    Receipt(cli::ReceiptCommands),

    /// Extract receipts from photos/PDFs and save them to the active person
    Extract {
        /// Files to process (jpg, jpeg, png, webp, pdf)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the active person's spending summary
    Summary,

    /// Export a backup of the whole ledger
    Export {
        /// Destination file
        path: PathBuf,
    },

    /// Import a backup, replacing the whole ledger
    Import {
        /// Backup file to load
        path: PathBuf,
    },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// One interactive session over an in-memory ledger
pub struct Session {
    ledger: Ledger,
    settings: Settings,
}

impl Session {
    /// Create a session with an empty ledger
    pub fn new(settings: Settings) -> Self {
        Self {
            ledger: Ledger::new(),
            settings,
        }
    }

    /// Run the read-dispatch loop until quit or EOF
    pub fn run(&mut self) -> io::Result<()> {
        println!("spese - expense tracking with AI receipt extraction");
        println!("Type 'help' for commands, 'quit' to leave.");
        println!("State lives in this session only; use 'export' to save a backup.");
        println!();

        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            self.print_prompt()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                // EOF
                println!();
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if self.dispatch(trimmed) {
                break;
            }
        }

        Ok(())
    }

    fn print_prompt(&self) -> io::Result<()> {
        match self.ledger.active_name() {
            Some(name) => print!("spese ({})> ", name),
            None => print!("spese> "),
        }
        io::stdout().flush()
    }

    /// Dispatch one command line; returns true when the session should end
    fn dispatch(&mut self, line: &str) -> bool {
        let argv = std::iter::once("spese").chain(line.split_whitespace());
        let parsed = match SessionCli::try_parse_from(argv) {
            Ok(parsed) => parsed,
            Err(err) => {
                // clap renders its own errors and the help text
                let _ = err.print();
                return false;
            }
        };

        let result = match parsed.command {
            SessionCommand::Person(cmd) => cli::handle_person_command(&mut self.ledger, cmd),
            SessionCommand::Budget(cmd) => {
                cli::handle_budget_command(&mut self.ledger, &self.settings, cmd)
            }
            SessionCommand::Receipt(cmd) => {
                cli::handle_receipt_command(&mut self.ledger, &self.settings, cmd)
            }
            SessionCommand::Extract { files } => {
                cli::handle_extract(&mut self.ledger, &self.settings, &files)
            }
            SessionCommand::Summary => self.show_summary(),
            SessionCommand::Export { path } => cli::handle_export(&self.ledger, &path),
            SessionCommand::Import { path } => cli::handle_import(&mut self.ledger, &path),
            SessionCommand::Quit => return true,
        };

        if let Err(err) = result {
            eprintln!("Error: {}", err);
        }

        false
    }

    fn show_summary(&self) -> crate::error::SpeseResult<()> {
        let (name, _) = self.ledger.active_person().ok_or_else(|| {
            crate::error::SpeseError::Validation(
                "No active person. Use 'person add <name>' or 'person select <name>' first."
                    .into(),
            )
        })?;

        let summary = SummaryService::new(&self.ledger).summarize(name)?;
        print!(
            "{}",
            display::format_summary(name, &summary, &self.settings.currency_symbol)
        );
        Ok(())
    }
}
