//! Rule-based field extraction per document type.

mod identity;
mod invoice;
mod receipt;
pub mod rules;

pub use identity::IdentityCardExtractor;
pub use invoice::InvoiceExtractor;
pub use receipt::ReceiptExtractor;

use tracing::debug;

use crate::models::document::{DocumentType, FieldMap, RawText};
use rules::FieldExtractor;

/// Trait for per-type document extractors.
pub trait DocumentExtractor {
    /// The document type this extractor handles.
    fn document_type(&self) -> DocumentType;

    /// Field extractors in output order.
    fn field_extractors(&self) -> Vec<&dyn FieldExtractor>;

    /// Extract all fields that match. Unmatched fields are omitted.
    fn extract(&self, text: &RawText) -> FieldMap {
        let mut fields = FieldMap::new();

        for extractor in self.field_extractors() {
            match extractor.extract(text.as_str()) {
                Some(found) => {
                    debug!(
                        "{}.{} matched rule {} at {:?}",
                        self.document_type(),
                        extractor.field(),
                        found.rule,
                        found.position
                    );
                    fields.insert(extractor.field().to_string(), found.value);
                }
                None => debug!("{}.{} not found", self.document_type(), extractor.field()),
            }
        }

        fields
    }
}

/// Extract the fields defined for `doc_type`. Unknown documents yield no fields.
pub fn extract_fields(doc_type: DocumentType, text: &RawText) -> FieldMap {
    match doc_type {
        DocumentType::Invoice => InvoiceExtractor::new().extract(text),
        DocumentType::Receipt => ReceiptExtractor::new().extract(text),
        DocumentType::IdentityCard => IdentityCardExtractor::new().extract(text),
        DocumentType::Unknown => FieldMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "BFI TECH\nINVOICE\nBill to: Client Company Ltd\nDate: 2025-07-31\nTotal Amount: IDR 2,450,000",
        "SUPERMARKET ABC\nRECEIPT\nDate: 2025-07-31\nTotal Paid: IDR 25,000\nThank you for shopping!",
        "NIK: 1234567890123456\nNama: BUDI SANTOSO\nTempat/Tgl Lahir: BANDUNG, 17-08-1990",
        "KEPADA:\nPT Sinar\nTOTAL: RP 880.000\nRp 5.000 Name: John Smith 12 Jan 2020",
        "",
    ];

    #[test]
    fn test_only_defined_keys_are_emitted() {
        for doc_type in DocumentType::ALL {
            for sample in SAMPLES {
                let fields = extract_fields(doc_type, &RawText::new(sample));
                let allowed = doc_type.field_names();
                for key in fields.keys() {
                    assert!(
                        allowed.contains(&key.as_str()),
                        "{} emitted {} for {:?}",
                        doc_type,
                        key,
                        sample
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_has_no_fields() {
        let fields = extract_fields(DocumentType::Unknown, &RawText::new("INVOICE 2025-07-31"));
        assert!(fields.is_empty());
    }
}
