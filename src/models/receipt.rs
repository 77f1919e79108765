//! Receipt and line item models
//!
//! Field names follow the fixed wire schema shared by the backup format and
//! the extraction response: `negozio`, `totale`, `articoli`, `nome`, `prezzo`.
//! Extraction output is tolerant by construction: any missing key deserializes
//! to its default instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ReceiptId;
use super::money::Money;

/// Placeholder store name used when a document doesn't reveal one
pub const UNKNOWN_STORE: &str = "Sconosciuto";

/// A single line on a receipt
///
/// Price may be zero or negative (discount rows); no validation is imposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description
    #[serde(default)]
    pub nome: String,

    /// Item price
    #[serde(default)]
    pub prezzo: Money,
}

impl LineItem {
    /// Create a new line item
    pub fn new(nome: impl Into<String>, prezzo: Money) -> Self {
        Self {
            nome: nome.into(),
            prezzo,
        }
    }
}

/// A single receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Internal stable identifier; never serialized, regenerated on load
    #[serde(skip, default)]
    pub id: ReceiptId,

    /// Store name
    #[serde(default = "default_store")]
    pub negozio: String,

    /// Receipt total; this is what budget totals sum, not the line items
    #[serde(default)]
    pub totale: Money,

    /// Line items, in document order
    #[serde(default)]
    pub articoli: Vec<LineItem>,
}

fn default_store() -> String {
    UNKNOWN_STORE.to_string()
}

impl Receipt {
    /// Create a receipt with explicit fields
    pub fn new(negozio: impl Into<String>, totale: Money, articoli: Vec<LineItem>) -> Self {
        Self {
            id: ReceiptId::new(),
            negozio: negozio.into(),
            totale,
            articoli,
        }
    }

    /// Create a manually-entered receipt
    ///
    /// Manual receipts always carry exactly one synthetic line item equal to
    /// the total. An empty or missing store name becomes the placeholder.
    pub fn manual(negozio: Option<&str>, totale: Money) -> Self {
        let negozio = match negozio.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_store(),
        };
        Self {
            id: ReceiptId::new(),
            negozio,
            totale,
            articoli: vec![LineItem::new("Totale", totale)],
        }
    }

    /// Sum of the line item prices (informational; totals use `totale`)
    pub fn items_total(&self) -> Money {
        self.articoli.iter().map(|a| a.prezzo).sum()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.negozio, self.totale)
    }
}
