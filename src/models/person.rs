//! Person model
//!
//! A person owns an ordered list of receipts and a budget limit. When
//! `nessun_limite` is set the limit is ignored entirely.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::receipt::Receipt;

/// Default budget limit for a newly created person
pub const DEFAULT_LIMIT: Money = Money::from_cents(10_000);

/// A person with their receipts and budget settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Receipts in arrival order
    #[serde(default)]
    pub scontrini: Vec<Receipt>,

    /// Budget limit in currency units
    #[serde(default = "default_limit")]
    pub limite: Money,

    /// When true, no budget comparison is performed
    #[serde(default)]
    pub nessun_limite: bool,
}

fn default_limit() -> Money {
    DEFAULT_LIMIT
}

impl Person {
    /// Create a person with no receipts and the default budget
    pub fn new() -> Self {
        Self {
            scontrini: Vec::new(),
            limite: DEFAULT_LIMIT,
            nessun_limite: false,
        }
    }

    /// Total spent: the sum of every receipt's `totale` field
    pub fn total_spent(&self) -> Money {
        self.scontrini.iter().map(|s| s.totale).sum()
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;

    #[test]
    fn test_new_person() {
        let person = Person::new();
        assert!(person.scontrini.is_empty());
        assert_eq!(person.limite, DEFAULT_LIMIT);
        assert!(!person.nessun_limite);
    }

    #[test]
    fn test_total_spent_sums_totale_only() {
        let mut person = Person::new();
        person.scontrini.push(Receipt::new(
            "A",
            Money::from_cents(3000),
            vec![LineItem::new("x", Money::from_cents(1))],
        ));
        person.scontrini.push(Receipt::new("B", Money::from_cents(4550), vec![]));

        assert_eq!(person.total_spent().cents(), 7550);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let person: Person = serde_json::from_str("{}").unwrap();
        assert!(person.scontrini.is_empty());
        assert_eq!(person.limite, DEFAULT_LIMIT);
        assert!(!person.nessun_limite);
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"scontrini": [], "limite": 250.0, "nessun_limite": true}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.limite.cents(), 25000);
        assert!(person.nessun_limite);
    }
}
