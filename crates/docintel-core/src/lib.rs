//! Core library for scanned document analysis.
//!
//! This crate provides:
//! - OCR text extraction behind the [`TextExtractor`] seam (pure Rust ONNX engine
//!   with the `native` feature)
//! - Keyword-based document classification (invoice, receipt, identity card)
//! - Rule-based field extraction with ordered pattern chains
//! - The [`DocumentAnalyzer`] pipeline tying it all together

pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;

pub use analyzer::DocumentAnalyzer;
pub use classifier::{DocumentClassifier, KeywordScores};
pub use error::{AnalysisError, ConfigError, DocIntelError, OcrError, Result};
pub use extract::{extract_fields, DocumentExtractor, IdentityCardExtractor, InvoiceExtractor, ReceiptExtractor};
pub use models::config::{ClassifierConfig, DocIntelConfig, OcrConfig, ZeroScorePolicy};
pub use models::document::{AnalysisResult, DocumentType, FieldMap, RawText};
pub use ocr::{OcrResult, TextBox, TextExtractor};

#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
