//! Keyword-based document classification.

use tracing::debug;

use crate::models::config::{ClassifierConfig, ZeroScorePolicy};
use crate::models::document::DocumentType;

pub const INVOICE_KEYWORDS: &[&str] = &[
    "invoice",
    "bill to",
    "billing",
    "amount due",
    "subtotal",
    "tax",
    "total amount",
];

pub const RECEIPT_KEYWORDS: &[&str] = &[
    "receipt",
    "thank you",
    "paid",
    "change",
    "cashier",
    "transaction",
];

pub const IDENTITY_KEYWORDS: &[&str] = &[
    "identity",
    "id card",
    "birth date",
    "date of birth",
    "nationality",
    "id number",
    "tempat/tgl lahir",
    "provinsi",
    "agama",
    "pekerjaan",
];

/// Number of distinct keywords of each set found in a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordScores {
    pub invoice: usize,
    pub receipt: usize,
    pub identity: usize,
}

impl KeywordScores {
    /// Score a text against all keyword sets (case-folded substring match).
    pub fn of(text: &str) -> Self {
        let folded = text.to_lowercase();
        Self {
            invoice: count_hits(&folded, INVOICE_KEYWORDS),
            receipt: count_hits(&folded, RECEIPT_KEYWORDS),
            identity: count_hits(&folded, IDENTITY_KEYWORDS),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.invoice == 0 && self.receipt == 0 && self.identity == 0
    }
}

fn count_hits(folded: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| folded.contains(*k)).count()
}

/// Picks the best matching document type for a text.
#[derive(Debug, Clone, Default)]
pub struct DocumentClassifier {
    config: ClassifierConfig,
}

impl DocumentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn with_zero_score(mut self, policy: ZeroScorePolicy) -> Self {
        self.config.zero_score = policy;
        self
    }

    /// Classify a text. Total: every input maps to one of the four types.
    pub fn classify(&self, text: &str) -> DocumentType {
        let scores = KeywordScores::of(text);
        let doc_type = self.decide(&scores);
        debug!(
            "Keyword scores invoice={} receipt={} identity={} -> {}",
            scores.invoice, scores.receipt, scores.identity, doc_type
        );
        doc_type
    }

    /// Apply the decision rule to precomputed scores.
    ///
    /// Ties favour invoice over receipt over identity card. With
    /// [`ZeroScorePolicy::Invoice`], all-zero scores resolve to invoice.
    pub fn decide(&self, scores: &KeywordScores) -> DocumentType {
        if scores.is_zero() && self.config.zero_score == ZeroScorePolicy::Unknown {
            return DocumentType::Unknown;
        }

        if scores.invoice >= scores.receipt && scores.invoice >= scores.identity {
            DocumentType::Invoice
        } else if scores.receipt >= scores.identity {
            DocumentType::Receipt
        } else if scores.identity > 0 {
            DocumentType::IdentityCard
        } else {
            DocumentType::Unknown
        }
    }
}
