//! Backup commands

use std::path::Path;

use crate::error::SpeseResult;
use crate::models::Ledger;
use crate::services::backup;

/// Export the whole ledger to a backup file
pub fn handle_export(ledger: &Ledger, path: &Path) -> SpeseResult<()> {
    backup::export_to_path(ledger, path)?;
    println!(
        "Exported {} person(s) to {}.",
        ledger.len(),
        path.display()
    );
    Ok(())
}

/// Import a backup file, replacing the whole ledger
pub fn handle_import(ledger: &mut Ledger, path: &Path) -> SpeseResult<()> {
    let count = backup::import_from_path(ledger, path)?;
    println!(
        "Imported {} person(s) from {}. No person is selected.",
        count,
        path.display()
    );
    Ok(())
}
