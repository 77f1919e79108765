//! Spending summary service
//!
//! Computes a person's running total against their budget. The total sums
//! each receipt's `totale` field; line items never participate.

use crate::error::{SpeseError, SpeseResult};
use crate::models::{Ledger, Money};

/// Budget status for a person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// The person has no budget limit; no comparison is produced
    NoLimit,
    /// Spending is within the limit, with this much remaining
    Within { remaining: Money },
    /// Spending exceeds the limit by this much
    Over { overrun: Money },
}

/// A person's spending summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpendingSummary {
    /// Sum of every receipt's total
    pub total_spent: Money,
    /// Comparison against the budget limit
    pub status: BudgetStatus,
}

/// Service for spending summaries
pub struct SummaryService<'a> {
    ledger: &'a Ledger,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Compute the spending summary for a person
    pub fn summarize(&self, name: &str) -> SpeseResult<SpendingSummary> {
        let person = self
            .ledger
            .person(name)
            .ok_or_else(|| SpeseError::person_not_found(name))?;

        let total_spent = person.total_spent();
        let status = if person.nessun_limite {
            BudgetStatus::NoLimit
        } else {
            let difference = person.limite - total_spent;
            if difference.is_negative() {
                BudgetStatus::Over {
                    overrun: difference.abs(),
                }
            } else {
                BudgetStatus::Within {
                    remaining: difference,
                }
            }
        };

        Ok(SpendingSummary { total_spent, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{PersonService, ReceiptService};

    fn ledger_with_anna(limit_cents: i64) -> Ledger {
        let mut ledger = Ledger::new();
        let mut people = PersonService::new(&mut ledger);
        people.add("Anna").unwrap();
        people
            .set_limit("Anna", Money::from_cents(limit_cents))
            .unwrap();
        ledger
    }

    #[test]
    fn test_empty_person() {
        let ledger = ledger_with_anna(10_000);
        let summary = SummaryService::new(&ledger).summarize("Anna").unwrap();

        assert!(summary.total_spent.is_zero());
        assert_eq!(
            summary.status,
            BudgetStatus::Within {
                remaining: Money::from_cents(10_000)
            }
        );
    }

    #[test]
    fn test_within_then_over_budget() {
        // Anna: limit 100.00, receipts 30.00 and 45.50 -> 24.50 remaining
        let mut ledger = ledger_with_anna(10_000);
        let mut receipts = ReceiptService::new(&mut ledger);
        receipts
            .add_manual("Anna", None, Money::from_cents(3_000))
            .unwrap();
        receipts
            .add_manual("Anna", None, Money::from_cents(4_550))
            .unwrap();

        let summary = SummaryService::new(&ledger).summarize("Anna").unwrap();
        assert_eq!(summary.total_spent.cents(), 7_550);
        assert_eq!(
            summary.status,
            BudgetStatus::Within {
                remaining: Money::from_cents(2_450)
            }
        );

        // A third receipt of 30.00 pushes Anna 5.50 over
        ReceiptService::new(&mut ledger)
            .add_manual("Anna", None, Money::from_cents(3_000))
            .unwrap();

        let summary = SummaryService::new(&ledger).summarize("Anna").unwrap();
        assert_eq!(summary.total_spent.cents(), 10_550);
        assert_eq!(
            summary.status,
            BudgetStatus::Over {
                overrun: Money::from_cents(550)
            }
        );
    }

    #[test]
    fn test_exactly_at_limit_is_within() {
        let mut ledger = ledger_with_anna(3_000);
        ReceiptService::new(&mut ledger)
            .add_manual("Anna", None, Money::from_cents(3_000))
            .unwrap();

        let summary = SummaryService::new(&ledger).summarize("Anna").unwrap();
        assert_eq!(
            summary.status,
            BudgetStatus::Within {
                remaining: Money::zero()
            }
        );
    }

    #[test]
    fn test_no_limit_never_compares() {
        let mut ledger = ledger_with_anna(100);
        PersonService::new(&mut ledger)
            .set_no_limit("Anna", true)
            .unwrap();
        ReceiptService::new(&mut ledger)
            .add_manual("Anna", None, Money::from_cents(99_999))
            .unwrap();

        let summary = SummaryService::new(&ledger).summarize("Anna").unwrap();
        assert_eq!(summary.status, BudgetStatus::NoLimit);
        assert_eq!(summary.total_spent.cents(), 99_999);
    }

    #[test]
    fn test_totals_ignore_line_items() {
        let mut ledger = ledger_with_anna(10_000);
        let receipt = crate::models::Receipt::new(
            "Mercato",
            Money::from_cents(2_000),
            vec![crate::models::LineItem::new(
                "voce gonfiata",
                Money::from_cents(9_999),
            )],
        );
        ReceiptService::new(&mut ledger)
            .append_extracted("Anna", vec![receipt])
            .unwrap();

        let summary = SummaryService::new(&ledger).summarize("Anna").unwrap();
        assert_eq!(summary.total_spent.cents(), 2_000);
    }

    #[test]
    fn test_unknown_person() {
        let ledger = Ledger::new();
        assert!(SummaryService::new(&ledger)
            .summarize("Anna")
            .unwrap_err()
            .is_not_found());
    }
}
