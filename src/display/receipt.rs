//! Receipt display formatting
//!
//! Renders a person's receipts as a table and a single receipt with its
//! line items.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Receipt;

#[derive(Tabled)]
struct ReceiptRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Negozio")]
    store: String,
    #[tabled(rename = "Totale")]
    total: String,
    #[tabled(rename = "Articoli")]
    items: usize,
}

/// Format a list of receipts as a table (1-based display indices)
pub fn format_receipt_table(receipts: &[Receipt], symbol: &str) -> String {
    if receipts.is_empty() {
        return "No receipts saved for this person.\n".to_string();
    }

    let rows: Vec<ReceiptRow> = receipts
        .iter()
        .enumerate()
        .map(|(i, r)| ReceiptRow {
            index: i + 1,
            store: r.negozio.clone(),
            total: r.totale.format_with_symbol(symbol),
            items: r.articoli.len(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single receipt with its line items
pub fn format_receipt_details(receipt: &Receipt, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} - {}\n",
        receipt.negozio,
        receipt.totale.format_with_symbol(symbol)
    ));

    for item in &receipt.articoli {
        output.push_str(&format!(
            "  - {}: {}\n",
            item.nome,
            item.prezzo.format_with_symbol(symbol)
        ));
    }

    output
}
