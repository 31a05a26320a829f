use super::{Extractor, NoticeBuilder};
use crate::constants::{LABEL_VALUE_PATTERN, TITLE_PATTERN};
use crate::errors::AppResult;
use crate::models::{Field, Notice};
use html_escape::decode_html_entities;
use regex::Regex;

/// Label expressions searched in raw markup, first listed wins.
const DEFAULT_MARKUP_LABELS: &[(Field, &[&str])] = &[
    (Field::Authority, &["PO/CA", "MO/AC"]),
    (Field::Type, &["Type"]),
    (Field::Region, &["Region", "Région"]),
    (Field::Country, &["Pays", "Country"]),
    (Field::Amount, &["Amount", "Montant"]),
    (Field::Funding, &["Type de financement", "Financing Type"]),
    (Field::PublishedOn, &["Published on", "Publié le"]),
    (Field::ClosingDate, &["Closing date", "Date de clôture"]),
    (Field::ClosingTime, &["Closing time", "Heure de clôture"]),
];

/// Builds the label/value pattern for a label expression.
///
/// The label is inserted as a regex fragment and must start its cell's text,
/// so `Type` does not match `Financing Type`. The value is captured lazily up
/// to the closing `</div>` of the next table cell, across line breaks.
pub fn label_pattern(label: &str) -> String {
    LABEL_VALUE_PATTERN.replace("{label}", label)
}

/// Field-to-patterns table for the markup extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupPatterns {
    rules: Vec<(Field, Vec<String>)>,
}

impl Default for MarkupPatterns {
    fn default() -> Self {
        let mut rules = vec![(Field::NumberTitle, vec![TITLE_PATTERN.to_string()])];
        rules.extend(DEFAULT_MARKUP_LABELS.iter().map(|(field, labels)| {
            (*field, labels.iter().map(|l| label_pattern(l)).collect())
        }));
        Self { rules }
    }
}

impl MarkupPatterns {
    /// Replaces the patterns for `field`, or appends a rule if it has none.
    pub fn with_rule(mut self, field: Field, patterns: Vec<String>) -> Self {
        match self.rules.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = patterns,
            None => self.rules.push((field, patterns)),
        }
        self
    }

    pub fn patterns(&self, field: Field) -> &[String] {
        self.rules
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, p)| p.as_slice())
            .unwrap_or(&[])
    }
}

/// Extracts notices from raw item markup with no DOM available.
#[derive(Debug, Clone)]
pub struct MarkupExtractor {
    rules: Vec<(Field, Vec<Regex>)>,
}

impl MarkupExtractor {
    /// Compiles every pattern of the table.
    ///
    /// # Errors
    ///
    /// Returns `RegexError` if any pattern fails to compile.
    pub fn new(patterns: &MarkupPatterns) -> AppResult<Self> {
        let rules = patterns
            .rules
            .iter()
            .map(|(field, sources)| -> AppResult<(Field, Vec<Regex>)> {
                let compiled = sources
                    .iter()
                    .map(|p| Regex::new(p))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((*field, compiled))
            })
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self { rules })
    }
}

/// First non-empty capture among `patterns`, unescaped and trimmed.
fn first_capture(patterns: &[Regex], markup: &str) -> String {
    patterns
        .iter()
        .find_map(|re| {
            let captured = re.captures(markup)?.get(1)?;
            let value = decode_html_entities(captured.as_str()).trim().to_string();
            (!value.is_empty()).then_some(value)
        })
        .unwrap_or_default()
}

impl Extractor<str> for MarkupExtractor {
    fn extract(&self, item: &str) -> AppResult<Notice> {
        let mut builder = NoticeBuilder::default();
        for (field, patterns) in &self.rules {
            builder.set_if_empty(*field, &first_capture(patterns, item));
        }
        Ok(builder.build())
    }
}
