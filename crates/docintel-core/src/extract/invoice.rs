//! Invoice field extraction.

use super::rules::patterns::{
    CAPITALIZED_LINE, COMPANY_LABELED, INVOICE_CURRENCY_PREFIXED, INVOICE_CURRENCY_SUFFIXED,
    INVOICE_TOTAL_LABELED, INVOICE_TOTAL_RP, KEPADA_LINE,
};
use super::rules::{DateExtractor, FieldExtractor, PatternChain, PatternRule};
use super::DocumentExtractor;
use crate::models::document::DocumentType;

/// Extracts `company`, `total_amount` and `date` from invoices.
pub struct InvoiceExtractor {
    company: PatternChain,
    total_amount: PatternChain,
    date: DateExtractor,
}

impl InvoiceExtractor {
    pub fn new() -> Self {
        Self {
            company: PatternChain::new(
                "company",
                vec![
                    PatternRule::trimmed(&KEPADA_LINE),
                    PatternRule::trimmed(&COMPANY_LABELED),
                    PatternRule::trimmed(&CAPITALIZED_LINE),
                ],
            ),
            // Rules whose pattern names the RP currency report the value as "RP <n>".
            total_amount: PatternChain::new(
                "total_amount",
                vec![
                    PatternRule::rupiah(&INVOICE_TOTAL_RP),
                    PatternRule::trimmed(&INVOICE_TOTAL_LABELED),
                    PatternRule::rupiah(&INVOICE_CURRENCY_PREFIXED),
                    PatternRule::rupiah(&INVOICE_CURRENCY_SUFFIXED),
                ],
            ),
            date: DateExtractor::new(),
        }
    }
}

impl Default for InvoiceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for InvoiceExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Invoice
    }

    fn field_extractors(&self) -> Vec<&dyn FieldExtractor> {
        vec![&self.company, &self.total_amount, &self.date]
    }
}
