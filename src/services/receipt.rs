//! Receipt service
//!
//! Appends manually-entered and extracted receipts to a person's list and
//! removes receipts by display position. Positional removal is resolved to
//! the receipt's internal id before mutating, so a stale index can never
//! remove the wrong entry after an unrelated reorder.

use crate::error::{SpeseError, SpeseResult};
use crate::models::{Ledger, Money, Receipt};

/// Service for receipt management
pub struct ReceiptService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ReceiptService<'a> {
    /// Create a new receipt service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Add a manually-entered receipt
    ///
    /// The total must be positive; the store name is optional.
    pub fn add_manual(
        &mut self,
        name: &str,
        store: Option<&str>,
        total: Money,
    ) -> SpeseResult<Receipt> {
        if !total.is_positive() {
            return Err(SpeseError::Validation(
                "Receipt total must be greater than zero".into(),
            ));
        }

        let person = self
            .ledger
            .person_mut(name)
            .ok_or_else(|| SpeseError::person_not_found(name))?;

        let receipt = Receipt::manual(store, total);
        person.scontrini.push(receipt.clone());
        Ok(receipt)
    }

    /// Append extracted receipts in arrival order, returning how many were added
    pub fn append_extracted(&mut self, name: &str, receipts: Vec<Receipt>) -> SpeseResult<usize> {
        let person = self
            .ledger
            .person_mut(name)
            .ok_or_else(|| SpeseError::person_not_found(name))?;

        let count = receipts.len();
        person.scontrini.extend(receipts);
        Ok(count)
    }

    /// Remove the receipt at a zero-based display position
    ///
    /// Returns whether a receipt was removed; an out-of-range index is a
    /// silent no-op.
    pub fn remove(&mut self, name: &str, index: usize) -> SpeseResult<bool> {
        let person = self
            .ledger
            .person_mut(name)
            .ok_or_else(|| SpeseError::person_not_found(name))?;

        let Some(id) = person.scontrini.get(index).map(|r| r.id) else {
            return Ok(false);
        };
        person.scontrini.retain(|r| r.id != id);
        Ok(true)
    }
}
