//! Document analysis pipeline: decode, OCR, classify, extract.

use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::classifier::DocumentClassifier;
use crate::error::{self, AnalysisError};
use crate::extract::extract_fields;
use crate::models::config::ClassifierConfig;
use crate::models::document::{AnalysisResult, RawText};
use crate::ocr::TextExtractor;

#[cfg(feature = "native")]
use crate::models::config::DocIntelConfig;
#[cfg(feature = "native")]
use crate::ocr::PureOcrEngine;

/// Runs one document through the pipeline.
///
/// Holds no per-request state; a single analyzer can serve any number of
/// requests as long as its text extractor can.
pub struct DocumentAnalyzer<E: TextExtractor> {
    extractor: E,
    classifier: DocumentClassifier,
}

impl<E: TextExtractor> DocumentAnalyzer<E> {
    /// Create an analyzer with the default classifier.
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            classifier: DocumentClassifier::new(),
        }
    }

    /// Set classifier configuration.
    pub fn with_classifier_config(mut self, config: ClassifierConfig) -> Self {
        self.classifier = DocumentClassifier::with_config(config);
        self
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Analyze uploaded bytes with their declared content type.
    ///
    /// Anything outside the `image/*` category is rejected before decoding.
    pub fn analyze(&self, bytes: &[u8], content_type: &str) -> Result<AnalysisResult, AnalysisError> {
        ensure_image_content_type(content_type)?;

        let image = image::load_from_memory(bytes)
            .map_err(|e| AnalysisError::InvalidInput(format!("failed to decode image: {}", e)))?;

        self.analyze_image(&image)
    }

    /// Analyze an already decoded image.
    pub fn analyze_image(&self, image: &DynamicImage) -> Result<AnalysisResult, AnalysisError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();
        debug!("Analyzing {}x{} image ({:?})", width, height, image.color());

        let text = match image {
            DynamicImage::ImageRgb8(_) => self.extractor.extract_text(image)?,
            other => {
                let rgb = DynamicImage::ImageRgb8(other.to_rgb8());
                self.extractor.extract_text(&rgb)?
            }
        };

        let result = self.analyze_text(&text)?;

        info!(
            "Processed document: {} ({} fields) in {}ms",
            result.document_type,
            result.fields.len(),
            start.elapsed().as_millis()
        );

        Ok(result)
    }

    /// Classify and extract fields from OCR output.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        analyze_text_with(&self.classifier, text)
    }

    /// Analyze a file, declaring its content type from the extension.
    ///
    /// Non-image files are rejected before they are read.
    pub fn analyze_file(&self, path: &Path) -> error::Result<AnalysisResult> {
        let content_type = content_type_for_path(path);
        ensure_image_content_type(content_type)?;

        let bytes = std::fs::read(path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(self.analyze(&bytes, content_type)?)
    }
}

#[cfg(feature = "native")]
impl DocumentAnalyzer<PureOcrEngine> {
    /// Load the OCR engine and classifier settings from configuration.
    pub fn from_config(config: &DocIntelConfig) -> error::Result<Self> {
        let engine = PureOcrEngine::from_config(config.ocr.clone())?;
        Ok(Self::new(engine).with_classifier_config(config.classifier.clone()))
    }
}

/// Classify and extract fields from OCR output without an OCR engine.
pub fn analyze_text_with(
    classifier: &DocumentClassifier,
    text: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let raw_text = RawText::new(text);
    if raw_text.is_blank() {
        return Err(AnalysisError::EmptyText);
    }

    let document_type = classifier.classify(raw_text.as_str());
    let fields = extract_fields(document_type, &raw_text);

    Ok(AnalysisResult {
        document_type,
        fields,
        raw_text,
    })
}

/// Reject content types outside the `image/*` category.
pub fn ensure_image_content_type(content_type: &str) -> Result<(), AnalysisError> {
    if is_image_content_type(content_type) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidInput(format!(
            "file must be an image, got '{}'",
            content_type
        )))
    }
}

/// Content type declared for a file, inferred from its extension.
pub fn content_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Whether a declared content type names an image (`image/png; q=1` counts).
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DocIntelError, OcrError};
    use crate::models::config::ZeroScorePolicy;
    use crate::models::document::DocumentType;
    use image::{ImageFormat, Rgb, RgbImage};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns fixed text and counts invocations.
    struct FixedText {
        text: String,
        calls: AtomicUsize,
    }

    impl FixedText {
        fn new(text: &str) -> Self {
            Self {
                text: text.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextExtractor for FixedText {
        fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError> {
            assert!(matches!(image, DynamicImage::ImageRgb8(_)));
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }
    }

    struct Failing;

    impl TextExtractor for Failing {
        fn extract_text(&self, _image: &DynamicImage) -> Result<String, OcrError> {
            Err(OcrError::Engine("tesseract crashed".to_string()))
        }
    }

    fn png_bytes() -> Vec<u8> {
        let image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image)
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_invoice_scenario() {
        let analyzer = DocumentAnalyzer::new(FixedText::new(
            "INVOICE\nBill to: Acme Corp\nTotal Amount: IDR 2,450,000\nDate: 2025-07-31\n",
        ));

        let result = analyzer.analyze(&png_bytes(), "image/png").unwrap();

        assert_eq!(result.document_type, DocumentType::Invoice);
        assert_eq!(result.fields.get("date").map(String::as_str), Some("2025-07-31"));
        assert_eq!(
            result.raw_text.as_str(),
            "INVOICE\nBill to: Acme Corp\nTotal Amount: IDR 2,450,000\nDate: 2025-07-31"
        );
        assert_eq!(analyzer.extractor().calls(), 1);
    }

    #[test]
    fn test_receipt_scenario() {
        let analyzer = DocumentAnalyzer::new(FixedText::new(
            "RECEIPT\nKedai Kopi\nThank you for shopping!\nTotal Rp 70.000",
        ));

        let result = analyzer.analyze(&png_bytes(), "image/png").unwrap();

        assert_eq!(result.document_type, DocumentType::Receipt);
        assert_eq!(result.fields.get("total_paid").map(String::as_str), Some("70.000"));
    }

    #[test]
    fn test_identity_scenario() {
        let analyzer = DocumentAnalyzer::new(FixedText::new(
            "PROVINSI DKI JAKARTA\nNIK: 1234567890123456\nNama: SITI AMINAH\nAgama: ISLAM",
        ));

        let result = analyzer.analyze(&png_bytes(), "image/jpeg").unwrap();

        assert_eq!(result.document_type, DocumentType::IdentityCard);
        assert_eq!(
            result.fields.get("id_number").map(String::as_str),
            Some("1234567890123456")
        );
        assert!(result.unexpected_fields().is_empty());
    }

    #[test]
    fn test_non_image_rejected_before_ocr() {
        let analyzer = DocumentAnalyzer::new(FixedText::new("INVOICE"));

        let err = analyzer.analyze(b"%PDF-1.7", "application/pdf").unwrap_err();

        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        assert!(err.is_client_error());
        assert_eq!(analyzer.extractor().calls(), 0);
    }

    #[test]
    fn test_undecodable_image_is_invalid_input() {
        let analyzer = DocumentAnalyzer::new(FixedText::new("INVOICE"));

        let err = analyzer.analyze(b"definitely not a png", "image/png").unwrap_err();

        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        assert_eq!(analyzer.extractor().calls(), 0);
    }

    #[test]
    fn test_whitespace_text_is_empty_text() {
        let analyzer = DocumentAnalyzer::new(FixedText::new("  \n\t \n"));

        let err = analyzer.analyze(&png_bytes(), "image/png").unwrap_err();

        assert!(matches!(err, AnalysisError::EmptyText));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_ocr_failure_propagates() {
        let analyzer = DocumentAnalyzer::new(Failing);

        let err = analyzer.analyze(&png_bytes(), "image/png").unwrap_err();

        assert!(matches!(err, AnalysisError::OcrFailure(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_non_rgb_image_is_converted() {
        let analyzer = DocumentAnalyzer::new(FixedText::new("RECEIPT"));
        let gray = DynamicImage::new_luma8(3, 3);

        let result = analyzer.analyze_image(&gray).unwrap();
        assert_eq!(result.document_type, DocumentType::Receipt);
    }

    #[test]
    fn test_classifier_config_applied() {
        let analyzer = DocumentAnalyzer::new(FixedText::new("lorem ipsum"))
            .with_classifier_config(ClassifierConfig {
                zero_score: ZeroScorePolicy::Unknown,
            });

        let result = analyzer.analyze_text("lorem ipsum").unwrap();
        assert_eq!(result.document_type, DocumentType::Unknown);
        assert!(result.fields.is_empty());
    }

    #[test]
    fn test_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.PNG");
        std::fs::write(&path, png_bytes()).unwrap();

        let analyzer = DocumentAnalyzer::new(FixedText::new("RECEIPT\nTotal Rp 9.000"));
        let result = analyzer.analyze_file(&path).unwrap();

        assert_eq!(result.document_type, DocumentType::Receipt);
        assert_eq!(analyzer.extractor().calls(), 1);
    }

    #[test]
    fn test_analyze_file_rejects_non_image_before_reading() {
        let analyzer = DocumentAnalyzer::new(FixedText::new("INVOICE"));

        // The file does not exist; the extension alone decides.
        let err = analyzer.analyze_file(Path::new("missing/notes.txt")).unwrap_err();

        assert!(matches!(
            err,
            DocIntelError::Analysis(AnalysisError::InvalidInput(_))
        ));
        assert!(err.to_string().contains("invalid input"));
        assert_eq!(analyzer.extractor().calls(), 0);
    }

    #[test]
    fn test_analyze_file_missing_image_is_io_error() {
        let analyzer = DocumentAnalyzer::new(FixedText::new("INVOICE"));

        let err = analyzer.analyze_file(Path::new("missing/scan.png")).unwrap_err();
        assert!(matches!(err, DocIntelError::Io(_)));
    }

    #[test]
    fn test_crlf_raw_text_kept() {
        let analyzer = DocumentAnalyzer::new(FixedText::new(""));

        let result = analyzer
            .analyze_text("SUPERMARKET ABC\r\nRECEIPT\r\nTotal Rp 70.000\r\n")
            .unwrap();

        assert_eq!(result.raw_text.as_str(), "SUPERMARKET ABC\r\nRECEIPT\r\nTotal Rp 70.000");
        assert_eq!(result.fields.get("vendor").map(String::as_str), Some("SUPERMARKET ABC"));
    }

    #[test]
    fn test_content_type_for_path() {
        assert_eq!(content_type_for_path(Path::new("a/scan.JPG")), "image/jpeg");
        assert_eq!(content_type_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(content_type_for_path(Path::new("README")), "application/octet-stream");
        assert!(ensure_image_content_type("application/pdf").is_err());
    }

    #[test]
    fn test_image_content_types() {
        assert!(is_image_content_type("image/png"));
        assert!(is_image_content_type("IMAGE/JPEG; charset=binary"));
        assert!(!is_image_content_type("text/plain"));
        assert!(!is_image_content_type(""));
    }
}
