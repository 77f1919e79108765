//! Backup export and import
//!
//! The backup is a single pretty-printed JSON document whose top-level shape
//! is the person map itself, exactly as held in memory. Import replaces the
//! whole ledger; on parse failure the existing ledger is left untouched.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{SpeseError, SpeseResult};
use crate::models::{Ledger, Person};

/// Serialize the full person map to pretty-printed JSON
pub fn export_json(ledger: &Ledger) -> SpeseResult<String> {
    serde_json::to_string_pretty(ledger.persons())
        .map_err(|e| SpeseError::Export(e.to_string()))
}

/// Export the ledger to a file
pub fn export_to_path(ledger: &Ledger, path: &Path) -> SpeseResult<()> {
    let json = export_json(ledger)?;
    std::fs::write(path, json)
        .map_err(|e| SpeseError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}

/// Parse a backup document into a person map
pub fn parse_backup(json: &str) -> SpeseResult<BTreeMap<String, Person>> {
    serde_json::from_str(json).map_err(|e| SpeseError::Import(e.to_string()))
}

/// Import a backup file, replacing the whole ledger
///
/// The ledger is only mutated after the document parses; a malformed file
/// leaves the existing state untouched. On success the active-person
/// selector is cleared.
pub fn import_from_path(ledger: &mut Ledger, path: &Path) -> SpeseResult<usize> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| SpeseError::Import(format!("Failed to read {}: {}", path.display(), e)))?;

    let persone = parse_backup(&contents)?;
    let count = persone.len();
    ledger.replace(persone);
    Ok(count)
}
