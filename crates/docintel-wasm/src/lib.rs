//! WASM bindings for document classification and field extraction.
//!
//! OCR runs outside the module (for example a browser-side engine); these
//! bindings take the recognized text and run the classification and
//! extraction steps.

use wasm_bindgen::prelude::*;

use docintel_core::analyzer::analyze_text_with;
use docintel_core::extract::rules::extract_date as core_extract_date;
use docintel_core::{DocumentClassifier, DocumentType, KeywordScores, ZeroScorePolicy};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Classify a text and extract the fields of its document type.
///
/// Returns `{ document_type, fields, raw_text }`.
#[wasm_bindgen]
pub fn analyze_text(text: &str) -> Result<JsValue, JsValue> {
    DocumentAnalyzerJs::new().analyze(text)
}

/// Document type name for a text.
#[wasm_bindgen]
pub fn classify(text: &str) -> String {
    DocumentClassifier::new().classify(text).as_str().to_string()
}

/// First date found in a text, if any.
#[wasm_bindgen]
pub fn extract_date(text: &str) -> Option<String> {
    let date = core_extract_date(text);
    if date.is_empty() { None } else { Some(date) }
}

/// Keyword hit counts per document type, as `{ invoice, receipt, identity_card }`.
#[wasm_bindgen]
pub fn keyword_scores(text: &str) -> Result<JsValue, JsValue> {
    #[derive(serde::Serialize)]
    struct Scores {
        invoice: usize,
        receipt: usize,
        identity_card: usize,
    }

    let scores = KeywordScores::of(text);
    serde_wasm_bindgen::to_value(&Scores {
        invoice: scores.invoice,
        receipt: scores.receipt,
        identity_card: scores.identity,
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Names of the supported document types.
#[wasm_bindgen]
pub fn document_types() -> js_sys::Array {
    DocumentType::ALL
        .iter()
        .map(|t| JsValue::from_str(t.as_str()))
        .collect()
}

/// Analyzer class for browser use.
#[wasm_bindgen]
pub struct DocumentAnalyzerJs {
    classifier: DocumentClassifier,
}

#[wasm_bindgen]
impl DocumentAnalyzerJs {
    /// Create a new analyzer.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            classifier: DocumentClassifier::new(),
        }
    }

    /// Report `unknown` instead of `invoice` for text with no keyword hits.
    #[wasm_bindgen]
    pub fn set_zero_score_unknown(&mut self, unknown: bool) {
        let policy = if unknown {
            ZeroScorePolicy::Unknown
        } else {
            ZeroScorePolicy::Invoice
        };
        self.classifier = DocumentClassifier::new().with_zero_score(policy);
    }

    /// Analyze recognized text.
    #[wasm_bindgen]
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = analyze_text_with(&self.classifier, text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Analyze recognized text and return the result as a JSON string.
    #[wasm_bindgen]
    pub fn analyze_json(&self, text: &str) -> Result<String, JsValue> {
        let result = analyze_text_with(&self.classifier, text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&result).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for DocumentAnalyzerJs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_classify() {
        assert_eq!(classify("RECEIPT\nThank you for shopping!"), "receipt");
        assert_eq!(classify(""), "invoice");
    }

    #[wasm_bindgen_test]
    fn test_extract_date() {
        assert_eq!(extract_date("Date: 31/07/2025"), Some("31/07/2025".to_string()));
        assert_eq!(extract_date("no dates here"), None);
    }

    #[wasm_bindgen_test]
    fn test_analyze_json() {
        let analyzer = DocumentAnalyzerJs::new();
        let json = analyzer
            .analyze_json("RECEIPT\nThank you for shopping!\nTotal Rp 70.000")
            .unwrap();
        assert!(json.contains(r#""document_type":"receipt""#));
        assert!(json.contains(r#""total_paid":"70.000""#));
    }

    #[wasm_bindgen_test]
    fn test_zero_score_unknown() {
        let mut analyzer = DocumentAnalyzerJs::new();
        analyzer.set_zero_score_unknown(true);
        let json = analyzer.analyze_json("lorem ipsum").unwrap();
        assert!(json.contains(r#""document_type":"unknown""#));
    }
}
