//! Receipt extraction adapter
//!
//! Converts a batch of document files (receipt photos or PDFs) into
//! structured [`Receipt`]s with one call to an external generative model.
//! The request is a fixed instruction plus one part per file: PDFs travel as
//! raw bytes with their media type, images are decoded and re-encoded as PNG
//! first. The whole batch succeeds or fails as a unit.

pub mod client;
pub mod prompt;
pub mod response;

pub use client::{GeminiClient, API_KEY_ENV};
pub use prompt::EXTRACTION_PROMPT;

use std::io::Cursor;
use std::path::Path;

use tracing::debug;

use crate::error::{SpeseError, SpeseResult};
use crate::models::Receipt;

/// An uploaded document: raw bytes plus a declared media type
#[derive(Debug, Clone)]
pub struct DocumentFile {
    /// Display name (usually the file name)
    pub name: String,
    /// Declared media type (`image/*` or `application/pdf`)
    pub mime_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    /// Create a document from in-memory parts
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Load a document from disk, deriving the media type from the extension
    pub fn from_path(path: &Path) -> SpeseResult<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let mime_type = match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "pdf" => "application/pdf",
            _ => {
                return Err(SpeseError::Validation(format!(
                    "Unsupported file type: {} (expected jpg, jpeg, png, webp or pdf)",
                    name
                )))
            }
        };

        let bytes = std::fs::read(path)
            .map_err(|e| SpeseError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        Ok(Self::new(name, mime_type, bytes))
    }

    /// Whether this document is a PDF
    pub fn is_pdf(&self) -> bool {
        self.mime_type == "application/pdf"
    }
}

/// One part of a multimodal request
#[derive(Debug, Clone)]
pub enum RequestPart {
    /// Natural-language instruction text
    Text(String),
    /// Binary document content with its media type
    Blob { mime_type: String, data: Vec<u8> },
}

/// The seam to the external document-understanding capability
///
/// One synchronous call per batch; implementations return the model's free
/// text, which the extractor then sanitizes and parses.
pub trait GenerativeModel {
    /// Generate a text response for a multi-part request
    fn generate(&self, parts: &[RequestPart]) -> SpeseResult<String>;
}

/// Turns document batches into structured receipts
pub struct ReceiptExtractor<'a> {
    model: &'a dyn GenerativeModel,
}

impl<'a> ReceiptExtractor<'a> {
    /// Create an extractor over a generative model
    pub fn new(model: &'a dyn GenerativeModel) -> Self {
        Self { model }
    }

    /// Extract receipts from a non-empty batch of documents
    ///
    /// Either the whole batch succeeds, yielding zero or more receipts, or
    /// the whole batch fails and yields none.
    pub fn extract(&self, files: &[DocumentFile]) -> SpeseResult<Vec<Receipt>> {
        if files.is_empty() {
            return Err(SpeseError::Validation(
                "No documents to process".into(),
            ));
        }

        let mut parts = Vec::with_capacity(files.len() + 1);
        parts.push(RequestPart::Text(EXTRACTION_PROMPT.to_string()));

        for file in files {
            if file.is_pdf() {
                parts.push(RequestPart::Blob {
                    mime_type: file.mime_type.clone(),
                    data: file.bytes.clone(),
                });
            } else {
                // decoding validates the image; everything is normalized to PNG
                parts.push(RequestPart::Blob {
                    mime_type: "image/png".to_string(),
                    data: reencode_png(file)?,
                });
            }
        }

        debug!(files = files.len(), "extracting receipts");
        let text = self.model.generate(&parts)?;
        response::parse_receipts(&text)
    }
}

/// Decode an image and re-encode it as PNG
fn reencode_png(file: &DocumentFile) -> SpeseResult<Vec<u8>> {
    let img = image::load_from_memory(&file.bytes).map_err(|e| {
        SpeseError::Extraction(format!("Failed to decode image {}: {}", file.name, e))
    })?;

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| {
            SpeseError::Extraction(format!("Failed to encode image {}: {}", file.name, e))
        })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Stub model that records the request and replays a canned response
    struct StubModel {
        reply: &'static str,
        seen_parts: RefCell<Vec<RequestPart>>,
    }

    impl StubModel {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply,
                seen_parts: RefCell::new(Vec::new()),
            }
        }
    }

    impl GenerativeModel for StubModel {
        fn generate(&self, parts: &[RequestPart]) -> SpeseResult<String> {
            *self.seen_parts.borrow_mut() = parts.to_vec();
            Ok(self.reply.to_string())
        }
    }

    struct FailingModel;

    impl GenerativeModel for FailingModel {
        fn generate(&self, _parts: &[RequestPart]) -> SpeseResult<String> {
            Err(SpeseError::Extraction("quota exceeded".into()))
        }
    }

    /// A valid 1x1 PNG
    fn tiny_png() -> Vec<u8> {
        let img = image::DynamicImage::new_rgb8(1, 1);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let model = StubModel::replying("{}");
        let err = ReceiptExtractor::new(&model).extract(&[]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_request_assembly_order() {
        let model = StubModel::replying(r#"{"scontrini": []}"#);
        let files = [
            DocumentFile::new("a.pdf", "application/pdf", b"%PDF-1.4".to_vec()),
            DocumentFile::new("b.png", "image/png", tiny_png()),
        ];
        ReceiptExtractor::new(&model).extract(&files).unwrap();

        let parts = model.seen_parts.borrow();
        assert_eq!(parts.len(), 3);
        assert!(matches!(&parts[0], RequestPart::Text(t) if t == EXTRACTION_PROMPT));
        assert!(
            matches!(&parts[1], RequestPart::Blob { mime_type, data }
                if mime_type == "application/pdf" && data.starts_with(b"%PDF"))
        );
        assert!(matches!(&parts[2], RequestPart::Blob { mime_type, .. }
            if mime_type == "image/png"));
    }

    #[test]
    fn test_fenced_empty_response_yields_no_receipts() {
        let model = StubModel::replying("```json\n{\"scontrini\": []}\n```");
        let files = [DocumentFile::new("a.pdf", "application/pdf", vec![1, 2, 3])];

        let receipts = ReceiptExtractor::new(&model).extract(&files).unwrap();
        assert!(receipts.is_empty());
    }

    #[test]
    fn test_successful_extraction() {
        let model = StubModel::replying(
            r#"{"scontrini": [
                {"negozio": "Esselunga", "totale": 30.0, "articoli": [{"nome": "Latte", "prezzo": 1.5}]},
                {"negozio": "Coop", "totale": 45.5, "articoli": []}
            ]}"#,
        );
        let files = [DocumentFile::new("a.pdf", "application/pdf", vec![1])];

        let receipts = ReceiptExtractor::new(&model).extract(&files).unwrap();
        assert_eq!(receipts.len(), 2);
        assert_eq!(receipts[0].negozio, "Esselunga");
        assert_eq!(receipts[1].totale.cents(), 4550);
    }

    #[test]
    fn test_model_failure_surfaces_as_extraction_error() {
        let files = [DocumentFile::new("a.pdf", "application/pdf", vec![1])];
        let err = ReceiptExtractor::new(&FailingModel)
            .extract(&files)
            .unwrap_err();
        assert!(matches!(err, SpeseError::Extraction(msg) if msg.contains("quota")));
    }

    #[test]
    fn test_undecodable_image_fails_whole_batch() {
        let model = StubModel::replying(r#"{"scontrini": []}"#);
        let files = [DocumentFile::new("bad.png", "image/png", vec![0, 1, 2, 3])];

        let err = ReceiptExtractor::new(&model).extract(&files).unwrap_err();
        assert!(matches!(err, SpeseError::Extraction(_)));
        // the model was never called
        assert!(model.seen_parts.borrow().is_empty());
    }

    #[test]
    fn test_jpeg_is_reencoded_to_png() {
        let img = image::DynamicImage::new_rgb8(2, 2);
        let mut jpeg = Vec::new();
        img.write_to(&mut Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
            .unwrap();

        let model = StubModel::replying(r#"{"scontrini": []}"#);
        let files = [DocumentFile::new("photo.jpg", "image/jpeg", jpeg)];
        ReceiptExtractor::new(&model).extract(&files).unwrap();

        let parts = model.seen_parts.borrow();
        let RequestPart::Blob { mime_type, data } = &parts[1] else {
            panic!("expected a blob part");
        };
        assert_eq!(mime_type, "image/png");
        // PNG magic number
        assert!(data.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let err = DocumentFile::from_path(Path::new("receipt.txt")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scontrino.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let file = DocumentFile::from_path(&path).unwrap();
        assert_eq!(file.name, "scontrino.pdf");
        assert_eq!(file.mime_type, "application/pdf");
        assert!(file.is_pdf());
        assert_eq!(file.bytes, b"%PDF-1.4");
    }
}
