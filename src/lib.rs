//! spese-cli - Expense tracking with AI-assisted receipt extraction
//!
//! This library backs the `spese` interactive terminal application. Each
//! tracked person carries their own list of receipts and an optional monthly
//! budget limit; receipts can be typed in by hand or extracted from photos
//! and PDF scans through the Gemini API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, receipts, people, the ledger)
//! - `services`: Business logic layer
//! - `extract`: Receipt extraction through a generative model
//! - `display`: Table and summary formatting
//! - `cli`: Command definitions and handlers
//! - `session`: The interactive read-dispatch loop
//!
//! # Example
//!
//! ```rust,ignore
//! use spese::config::{SpesePaths, Settings};
//! use spese::session::Session;
//!
//! let paths = SpesePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! Session::new(settings).run()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod extract;
pub mod models;
pub mod services;
pub mod session;

pub use error::SpeseError;
