//! Core data models for spese-cli
//!
//! This module contains the data structures that represent the expense
//! tracking domain: people, receipts, line items, and the session ledger.

pub mod ids;
pub mod ledger;
pub mod money;
pub mod person;
pub mod receipt;

pub use ids::ReceiptId;
pub use ledger::Ledger;
pub use money::Money;
pub use person::{Person, DEFAULT_LIMIT};
pub use receipt::{LineItem, Receipt, UNKNOWN_STORE};
