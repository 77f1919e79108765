//! Extraction instruction text
//!
//! The model is asked for the exact JSON schema shared with the backup
//! format. The response is still sanitized afterwards because models wrap
//! output in markdown fences anyway; see [`crate::extract::response`].

/// Fixed instruction sent as the first part of every extraction request
pub const EXTRACTION_PROMPT: &str = r#"Sei un analista contabile. Analizza i documenti allegati.
Restituisci SOLO un file JSON valido con questa struttura esatta:
{
    "scontrini": [
        {
            "negozio": "Nome del negozio",
            "totale": 0.00,
            "articoli": [{"nome": "Prodotto 1", "prezzo": 0.00}]
        }
    ]
}
Non inserire formattazione markdown, solo il JSON puro."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_schema_keys() {
        for key in ["scontrini", "negozio", "totale", "articoli", "nome", "prezzo"] {
            assert!(EXTRACTION_PROMPT.contains(key), "missing key: {}", key);
        }
    }

    #[test]
    fn test_prompt_forbids_markdown() {
        assert!(EXTRACTION_PROMPT.contains("markdown"));
    }
}
