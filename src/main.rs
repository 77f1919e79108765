use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spese::config::{SpesePaths, Settings};
use spese::extract::API_KEY_ENV;
use spese::session::Session;

#[derive(Parser)]
#[command(
    name = "spese",
    version,
    about = "Terminal-based multi-person expense tracker with AI receipt extraction",
    long_about = "spese tracks expenses per person, each with their own receipts \
                  and an optional monthly budget limit. Receipts can be entered \
                  by hand or extracted from photos and PDF scans through the \
                  Gemini API."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Session,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // Pick up GEMINI_API_KEY and friends from a local .env, if any
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = SpesePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    match cli.command {
        Some(Commands::Config) => {
            println!("spese Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Model:           {}", settings.model);
            println!();
            // Never print the key itself
            match std::env::var(API_KEY_ENV) {
                Ok(_) => println!("{} is set.", API_KEY_ENV),
                Err(_) => println!(
                    "{} is NOT set. Receipt extraction will be unavailable.",
                    API_KEY_ENV
                ),
            }
        }
        Some(Commands::Session) | None => {
            Session::new(settings).run()?;
        }
    }

    Ok(())
}
