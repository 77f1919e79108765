//! Spending summary formatting

use crate::services::{BudgetStatus, SpendingSummary};

/// Format a person's spending summary
pub fn format_summary(name: &str, summary: &SpendingSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {}\n", name));
    output.push_str(&format!(
        "Total spent: {}\n",
        summary.total_spent.format_with_symbol(symbol)
    ));

    match summary.status {
        BudgetStatus::NoLimit => {
            output.push_str("No budget limit set.\n");
        }
        BudgetStatus::Within { remaining } => {
            output.push_str(&format!(
                "WITHIN BUDGET: {} remaining.\n",
                remaining.format_with_symbol(symbol)
            ));
        }
        BudgetStatus::Over { overrun } => {
            output.push_str(&format!(
                "OVER BUDGET by {}!\n",
                overrun.format_with_symbol(symbol)
            ));
        }
    }

    output
}
