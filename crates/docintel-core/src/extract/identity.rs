//! Identity card field extraction.

use super::rules::patterns::{ID_NUMBER_LABELED, LONG_DIGIT_RUN, NAME_LABELED, TWO_CAPITALIZED_WORDS};
use super::rules::{DateExtractor, FieldExtractor, PatternChain, PatternRule};
use super::DocumentExtractor;
use crate::models::document::DocumentType;

/// Extracts `name`, `id_number` and `birth_date` from identity cards.
pub struct IdentityCardExtractor {
    name: PatternChain,
    id_number: PatternChain,
    birth_date: DateExtractor,
}

impl IdentityCardExtractor {
    pub fn new() -> Self {
        Self {
            name: PatternChain::new(
                "name",
                vec![
                    PatternRule::trimmed(&NAME_LABELED),
                    PatternRule::trimmed(&TWO_CAPITALIZED_WORDS),
                ],
            ),
            id_number: PatternChain::new(
                "id_number",
                vec![
                    PatternRule::trimmed(&ID_NUMBER_LABELED),
                    PatternRule::trimmed(&LONG_DIGIT_RUN),
                ],
            ),
            birth_date: DateExtractor::for_field("birth_date"),
        }
    }
}

impl Default for IdentityCardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for IdentityCardExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::IdentityCard
    }

    fn field_extractors(&self) -> Vec<&dyn FieldExtractor> {
        vec![&self.name, &self.id_number, &self.birth_date]
    }
}
