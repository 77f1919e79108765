//! Sanitization and parsing of extraction responses
//!
//! The model returns free text that is expected to contain one JSON object,
//! possibly wrapped in markdown code fences. Parsing is a tolerant two-step:
//! try the text as-is first, then strip the known fence markers and retry
//! once. A second failure is an extraction error carrying the original parse
//! message. A parsed object without the `scontrini` key yields zero receipts.

use serde::Deserialize;

use crate::error::{SpeseError, SpeseResult};
use crate::models::Receipt;

/// Top-level shape of the extraction response
#[derive(Debug, Default, Deserialize)]
pub struct ExtractionResponse {
    /// Extracted receipts; absent key means none were found
    #[serde(default)]
    pub scontrini: Vec<Receipt>,
}

/// Remove ```` ```json ````/```` ``` ```` fence markers and surrounding whitespace
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse receipts out of a model response
pub fn parse_receipts(text: &str) -> SpeseResult<Vec<Receipt>> {
    let parsed = match serde_json::from_str::<ExtractionResponse>(text.trim()) {
        Ok(parsed) => parsed,
        Err(first_err) => {
            let stripped = strip_code_fences(text);
            serde_json::from_str(&stripped).map_err(|_| {
                SpeseError::Extraction(format!("Response is not valid JSON: {}", first_err))
            })?
        }
    };
    Ok(parsed.scontrini)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let receipts = parse_receipts(
            r#"{"scontrini": [{"negozio": "Coop", "totale": 12.5, "articoli": []}]}"#,
        )
        .unwrap();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].negozio, "Coop");
        assert_eq!(receipts[0].totale.cents(), 1250);
    }

    #[test]
    fn test_parse_fenced_empty_list() {
        let receipts = parse_receipts("```json\n{\"scontrini\": []}\n```").unwrap();
        assert!(receipts.is_empty());
    }

    #[test]
    fn test_parse_fenced_without_language_tag() {
        let receipts =
            parse_receipts("```\n{\"scontrini\": [{\"negozio\": \"Lidl\"}]}\n```").unwrap();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].negozio, "Lidl");
    }

    #[test]
    fn test_missing_scontrini_key_yields_zero_receipts() {
        let receipts = parse_receipts(r#"{"qualcosa": "altro"}"#).unwrap();
        assert!(receipts.is_empty());
    }

    #[test]
    fn test_missing_receipt_fields_use_defaults() {
        let receipts = parse_receipts(r#"{"scontrini": [{}]}"#).unwrap();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].negozio, crate::models::UNKNOWN_STORE);
        assert!(receipts[0].totale.is_zero());
        assert!(receipts[0].articoli.is_empty());
    }

    #[test]
    fn test_non_json_is_an_extraction_error() {
        let err = parse_receipts("I could not read the documents, sorry.").unwrap_err();
        assert!(matches!(err, SpeseError::Extraction(_)));
    }

    #[test]
    fn test_fenced_garbage_is_an_extraction_error() {
        let err = parse_receipts("```json\nnot json at all\n```").unwrap_err();
        assert!(matches!(err, SpeseError::Extraction(_)));
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(
            strip_code_fences("```json\n{\"a\": 1}\n```"),
            "{\"a\": 1}"
        );
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_line_items_with_discount() {
        let receipts = parse_receipts(
            r#"{"scontrini": [{"negozio": "Conad", "totale": 9.0,
                "articoli": [{"nome": "Vino", "prezzo": 10.0},
                             {"nome": "Sconto socio", "prezzo": -1.0}]}]}"#,
        )
        .unwrap();
        assert_eq!(receipts[0].articoli[1].prezzo.cents(), -100);
    }
}
