//! Extraction command
//!
//! Sends a batch of receipt photos or PDFs through the extraction adapter
//! and appends the resulting receipts to the active person. The call is
//! synchronous and may take seconds; the session simply waits for it.

use std::path::PathBuf;

use super::active_name;
use crate::config::Settings;
use crate::error::SpeseResult;
use crate::extract::{DocumentFile, GeminiClient, ReceiptExtractor};
use crate::models::Ledger;
use crate::services::ReceiptService;

/// Handle the extract command
pub fn handle_extract(
    ledger: &mut Ledger,
    settings: &Settings,
    files: &[PathBuf],
) -> SpeseResult<()> {
    let name = active_name(ledger)?;

    let documents = files
        .iter()
        .map(|path| DocumentFile::from_path(path))
        .collect::<SpeseResult<Vec<_>>>()?;

    let client = GeminiClient::from_settings(settings)?;
    println!(
        "Reading {} file(s) with {}... this can take a while.",
        documents.len(),
        client.model_name()
    );

    let receipts = ReceiptExtractor::new(&client).extract(&documents)?;
    let added = ReceiptService::new(ledger).append_extracted(&name, receipts)?;

    if added == 0 {
        println!("No receipts found in the documents.");
    } else {
        println!("Saved {} receipt(s) for {}.", added, name);
    }

    Ok(())
}
