//! Terminal display formatting

pub mod receipt;
pub mod summary;

pub use receipt::{format_receipt_details, format_receipt_table};
pub use summary::format_summary;
