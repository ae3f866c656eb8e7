//! Receipt field extraction.

use super::rules::patterns::{
    RECEIPT_CURRENCY_PREFIXED, RECEIPT_RP, RECEIPT_TOTAL_LABELED, RECEIPT_TOTAL_RP, VENDOR_LINE,
};
use super::rules::{DateExtractor, FieldExtractor, PatternChain, PatternRule};
use super::DocumentExtractor;
use crate::models::document::DocumentType;

/// Extracts `vendor`, `total_paid` and `date` from receipts.
///
/// Unlike invoices, totals are reported exactly as captured, with no `Rp` prefix.
pub struct ReceiptExtractor {
    vendor: PatternChain,
    total_paid: PatternChain,
    date: DateExtractor,
}

impl ReceiptExtractor {
    pub fn new() -> Self {
        Self {
            vendor: PatternChain::new("vendor", vec![PatternRule::trimmed(&VENDOR_LINE)]),
            total_paid: PatternChain::new(
                "total_paid",
                vec![
                    PatternRule::trimmed(&RECEIPT_TOTAL_RP),
                    PatternRule::trimmed(&RECEIPT_RP),
                    PatternRule::trimmed(&RECEIPT_TOTAL_LABELED),
                    PatternRule::trimmed(&RECEIPT_CURRENCY_PREFIXED),
                ],
            ),
            date: DateExtractor::new(),
        }
    }
}

impl Default for ReceiptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for ReceiptExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Receipt
    }

    fn field_extractors(&self) -> Vec<&dyn FieldExtractor> {
        vec![&self.vendor, &self.total_paid, &self.date]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::RawText;
    use pretty_assertions::assert_eq;

    fn field(text: &str, name: &str) -> Option<String> {
        ReceiptExtractor::new().extract(&RawText::new(text)).remove(name)
    }

    #[test]
    fn test_total_rp_without_prefix() {
        let text = "RECEIPT\nKopi Susu 2x\nThank you for shopping!\nTotal Rp 70.000";
        assert_eq!(field(text, "total_paid").as_deref(), Some("70.000"));
    }

    #[test]
    fn test_labeled_rp_before_bare_rp() {
        let text = "Es Teh Rp 5.000\nSub Total Rp 25.000\nBayar Rp 50.000";
        assert_eq!(field(text, "total_paid").as_deref(), Some("25.000"));
    }

    #[test]
    fn test_bare_rp() {
        assert_eq!(field("Nasi Goreng Rp. 18.500", "total_paid").as_deref(), Some("18.500"));
    }

    #[test]
    fn test_total_paid_currency_code() {
        let text = "SUPERMARKET ABC\n123 Main Street\nRECEIPT\nTotal Paid: IDR 25,000";
        assert_eq!(field(text, "total_paid").as_deref(), Some("IDR 25,000"));
    }

    #[test]
    fn test_vendor_first_capitalized_line() {
        let text = "SUPERMARKET ABC\n123 Main Street\nRECEIPT\nDate: 2025-07-31";
        let fields = ReceiptExtractor::new().extract(&RawText::new(text));

        assert_eq!(fields.get("vendor").map(String::as_str), Some("SUPERMARKET ABC"));
        assert_eq!(fields.get("date").map(String::as_str), Some("2025-07-31"));
    }

    #[test]
    fn test_vendor_skips_non_matching_lines() {
        let text = "#001 pos\nWarung Bu Sri & Co.\nTotal Rp 9.000";
        assert_eq!(field(text, "vendor").as_deref(), Some("Warung Bu Sri & Co."));
    }

    #[test]
    fn test_currency_code_without_label() {
        let text = "CAFE LUNA\nLatte 1x\nUSD 12.50";
        let found = ReceiptExtractor::new().total_paid.extract(text).unwrap();

        assert_eq!(found.value, "12.50");
        assert_eq!(found.rule, 3);
    }

    #[test]
    fn test_crlf_line_endings() {
        let fields = ReceiptExtractor::new().extract(&RawText::new(
            "SUPERMARKET ABC\r\n123 Main Street\r\nRECEIPT\r\nTotal Rp 70.000",
        ));

        assert_eq!(fields.get("vendor").map(String::as_str), Some("SUPERMARKET ABC"));
        assert_eq!(fields.get("total_paid").map(String::as_str), Some("70.000"));
    }
}
