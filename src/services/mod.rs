//! Service layer for spese-cli
//!
//! The service layer provides business logic on top of the in-memory ledger,
//! handling validation, budget computations, and backup export/import.

pub mod backup;
pub mod person;
pub mod receipt;
pub mod summary;

pub use person::PersonService;
pub use receipt::ReceiptService;
pub use summary::{BudgetStatus, SpendingSummary, SummaryService};
