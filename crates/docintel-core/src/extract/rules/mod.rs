//! Ordered pattern rules shared by the document extractors.

pub mod dates;
pub mod patterns;

pub use dates::{extract_date, DateExtractor};

use regex::Regex;

/// Trait for single-field extractors.
pub trait FieldExtractor {
    /// Name of the field this extractor fills.
    fn field(&self) -> &'static str;

    /// Extract the field from text. `None` when no rule matches.
    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>>;
}

/// A value pulled out of the text by one rule of a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Index of the rule that produced the value.
    pub rule: usize,
    /// Byte span of the whole match in the source text.
    pub position: (usize, usize),
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: usize, start: usize, end: usize) -> Self {
        Self {
            value,
            rule,
            position: (start, end),
        }
    }
}

/// How a captured value is turned into the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// The captured text, trimmed.
    Trimmed,
    /// `"RP "` followed by the captured text, trimmed.
    RupiahPrefixed,
}

impl ValueRule {
    pub fn apply(&self, captured: &str) -> String {
        match self {
            ValueRule::Trimmed => captured.trim().to_string(),
            ValueRule::RupiahPrefixed => format!("RP {}", captured).trim().to_string(),
        }
    }
}

/// One pattern of a chain together with its value rule.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub regex: &'static Regex,
    pub value: ValueRule,
}

impl PatternRule {
    pub const fn trimmed(regex: &'static Regex) -> Self {
        Self {
            regex,
            value: ValueRule::Trimmed,
        }
    }

    pub const fn rupiah(regex: &'static Regex) -> Self {
        Self {
            regex,
            value: ValueRule::RupiahPrefixed,
        }
    }
}

/// Ordered fallback rules for one field. The first rule whose pattern
/// matches with a non-blank capture wins; order is precedence.
#[derive(Debug, Clone)]
pub struct PatternChain {
    field: &'static str,
    rules: Vec<PatternRule>,
}

impl PatternChain {
    pub fn new(field: &'static str, rules: Vec<PatternRule>) -> Self {
        Self { field, rules }
    }
}

impl FieldExtractor for PatternChain {
    fn field(&self) -> &'static str {
        self.field
    }

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            let caps = rule.regex.captures(text)?;
            let whole = caps.get(0)?;
            let captured = caps.get(1).unwrap_or(whole);

            let value = rule.value.apply(captured.as_str());
            if value.is_empty() {
                return None;
            }

            Some(ExtractionMatch::new(value, index, whole.start(), whole.end()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref LABELED: Regex = Regex::new(r"(?i)code:[ \t]*([A-Z]*)").unwrap();
        static ref BARE: Regex = Regex::new(r"\b(\d{3})\b").unwrap();
    }

    fn chain() -> PatternChain {
        PatternChain::new(
            "code",
            vec![PatternRule::trimmed(&LABELED), PatternRule::rupiah(&BARE)],
        )
    }

    #[test]
    fn test_first_rule_wins() {
        let found = chain().extract("123\ncode: ABC").unwrap();
        assert_eq!(found.value, "ABC");
        assert_eq!(found.rule, 0);
    }

    #[test]
    fn test_falls_back_in_order() {
        let found = chain().extract("value 123").unwrap();
        assert_eq!(found.value, "RP 123");
        assert_eq!(found.rule, 1);
        assert_eq!(found.position, (6, 9));
    }

    #[test]
    fn test_blank_capture_falls_through() {
        let found = chain().extract("code: 456").unwrap();
        assert_eq!(found.value, "RP 456");
    }

    #[test]
    fn test_no_match() {
        assert!(chain().extract("nothing here").is_none());
    }

    #[test]
    fn test_value_rules() {
        assert_eq!(ValueRule::Trimmed.apply("  70.000 "), "70.000");
        assert_eq!(ValueRule::RupiahPrefixed.apply("880.000"), "RP 880.000");
    }
}
