//! Date extraction shared by all document types.

use super::patterns::{DATE_DAY_MONTH_NAME, DATE_DMY, DATE_YMD};
use super::{ExtractionMatch, FieldExtractor, PatternChain, PatternRule};

/// Date field extractor.
///
/// Tries `D/M/YYYY`, then `YYYY-M-D`, then `D Mon YYYY` and returns the
/// matched text as written.
pub struct DateExtractor {
    chain: PatternChain,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self::for_field("date")
    }

    /// A date extractor filling a differently named field (e.g. `birth_date`).
    pub fn for_field(field: &'static str) -> Self {
        Self {
            chain: PatternChain::new(
                field,
                vec![
                    PatternRule::trimmed(&DATE_DMY),
                    PatternRule::trimmed(&DATE_YMD),
                    PatternRule::trimmed(&DATE_DAY_MONTH_NAME),
                ],
            ),
        }
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    fn field(&self) -> &'static str {
        self.chain.field()
    }

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        self.chain.extract(text)
    }
}

/// Extract the first date in the text, or an empty string if none matches.
pub fn extract_date(text: &str) -> String {
    DateExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}
