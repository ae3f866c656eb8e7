//! Document analysis data model.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Extracted fields keyed by field name. Keys depend on the document type.
pub type FieldMap = BTreeMap<String, String>;

/// Known document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Invoice,
    Receipt,
    #[serde(alias = "id_card")]
    IdentityCard,
    Unknown,
}

impl DocumentType {
    /// All variants, in classifier precedence order.
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Invoice,
        DocumentType::Receipt,
        DocumentType::IdentityCard,
        DocumentType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::Receipt => "receipt",
            DocumentType::IdentityCard => "identity_card",
            DocumentType::Unknown => "unknown",
        }
    }

    /// Field names an extractor may emit for this type.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            DocumentType::Invoice => &["company", "total_amount", "date"],
            DocumentType::Receipt => &["vendor", "total_paid", "date"],
            DocumentType::IdentityCard => &["name", "id_number", "birth_date"],
            DocumentType::Unknown => &[],
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "invoice" => Ok(DocumentType::Invoice),
            "receipt" => Ok(DocumentType::Receipt),
            "identity_card" | "id_card" => Ok(DocumentType::IdentityCard),
            "unknown" => Ok(DocumentType::Unknown),
            other => Err(format!("unknown document type: {}", other)),
        }
    }
}

/// OCR output with outer whitespace removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawText(String);

impl RawText {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is no usable text.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for RawText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of analyzing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_type: DocumentType,
    pub fields: FieldMap,
    pub raw_text: RawText,
}

impl AnalysisResult {
    /// Fields present that are not defined for the document type.
    pub fn unexpected_fields(&self) -> Vec<&str> {
        let allowed = self.document_type.field_names();
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|k| !allowed.contains(k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_type_serde() {
        assert_eq!(
            serde_json::to_string(&DocumentType::IdentityCard).unwrap(),
            "\"identity_card\""
        );
        let parsed: DocumentType = serde_json::from_str("\"id_card\"").unwrap();
        assert_eq!(parsed, DocumentType::IdentityCard);
    }

    #[test]
    fn test_document_type_from_str() {
        assert_eq!("Receipt".parse::<DocumentType>().unwrap(), DocumentType::Receipt);
        assert!("passport".parse::<DocumentType>().is_err());
    }

    #[test]
    fn test_raw_text_trims() {
        let text = RawText::new("  \n INVOICE\nTotal \t\n");
        assert_eq!(text.as_str(), "INVOICE\nTotal");
        assert!(RawText::new(" \n\t ").is_blank());
    }

    #[test]
    fn test_analysis_result_json_shape() {
        let mut fields = FieldMap::new();
        fields.insert("date".to_string(), "2025-07-31".to_string());

        let result = AnalysisResult {
            document_type: DocumentType::Invoice,
            fields,
            raw_text: RawText::new("INVOICE 2025-07-31"),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "document_type": "invoice",
                "fields": { "date": "2025-07-31" },
                "raw_text": "INVOICE 2025-07-31"
            })
        );
        assert!(result.unexpected_fields().is_empty());
    }

    #[test]
    fn test_unexpected_fields() {
        let mut fields = FieldMap::new();
        fields.insert("vendor".to_string(), "ACME".to_string());

        let result = AnalysisResult {
            document_type: DocumentType::Invoice,
            fields,
            raw_text: RawText::default(),
        };
        assert_eq!(result.unexpected_fields(), vec!["vendor"]);
    }
}
