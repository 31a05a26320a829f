use crate::constants::*;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One tender announcement extracted from a result list item.
///
/// Every field is plain text as rendered on the page. An empty string means
/// the field was not found; fields are never omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notice {
    pub number_title: String,
    #[serde(rename = "type")]
    pub notice_type: String,
    pub authority: String,
    pub region: String,
    pub country: String,
    pub amount: String,
    pub funding: String,
    pub published_on: String,
    pub closing_date: String,
    pub closing_time: String,
}

impl Notice {
    /// Returns the value stored for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::NumberTitle => &self.number_title,
            Field::Type => &self.notice_type,
            Field::Authority => &self.authority,
            Field::Region => &self.region,
            Field::Country => &self.country,
            Field::Amount => &self.amount,
            Field::Funding => &self.funding,
            Field::PublishedOn => &self.published_on,
            Field::ClosingDate => &self.closing_date,
            Field::ClosingTime => &self.closing_time,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::NumberTitle => &mut self.number_title,
            Field::Type => &mut self.notice_type,
            Field::Authority => &mut self.authority,
            Field::Region => &mut self.region,
            Field::Country => &mut self.country,
            Field::Amount => &mut self.amount,
            Field::Funding => &mut self.funding,
            Field::PublishedOn => &mut self.published_on,
            Field::ClosingDate => &mut self.closing_date,
            Field::ClosingTime => &mut self.closing_time,
        }
    }

    /// True when no field was populated.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Identifier of a `Notice` field, used as key in label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    NumberTitle,
    Type,
    Authority,
    Region,
    Country,
    Amount,
    Funding,
    PublishedOn,
    ClosingDate,
    ClosingTime,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::NumberTitle,
        Field::Type,
        Field::Authority,
        Field::Region,
        Field::Country,
        Field::Amount,
        Field::Funding,
        Field::PublishedOn,
        Field::ClosingDate,
        Field::ClosingTime,
    ];

    /// Serialized name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NumberTitle => "number_title",
            Self::Type => "type",
            Self::Authority => "authority",
            Self::Region => "region",
            Self::Country => "country",
            Self::Amount => "amount",
            Self::Funding => "funding",
            Self::PublishedOn => "published_on",
            Self::ClosingDate => "closing_date",
            Self::ClosingTime => "closing_time",
        }
    }
}

impl Field {
    /// Looks a field up by its serialized name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Language preference detected from the page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLanguage {
    French,
    English,
}

impl PageLanguage {
    /// Classifies a language tag. Only a `fr` prefix counts as French.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("fr") {
            Self::French
        } else {
            Self::English
        }
    }
}

/// Which extraction strategy runs over the page items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Ordered label probing against the parsed DOM
    Probe,
    /// Single pass over label/value cells through the synonym dictionary
    #[default]
    Dictionary,
    /// Pattern matching on raw item markup
    Markup,
}

impl Strategy {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Probe => "DOM probe",
            Self::Dictionary => "Label dictionary",
            Self::Markup => "Markup patterns",
        }
    }
}

impl FromStr for Strategy {
    type Err = AppError;

    fn from_str(value: &str) -> AppResult<Self> {
        let lower = value.trim().to_lowercase();
        if PROBE_ALIASES.contains(&lower.as_str()) {
            Ok(Self::Probe)
        } else if DICTIONARY_ALIASES.contains(&lower.as_str()) {
            Ok(Self::Dictionary)
        } else if MARKUP_ALIASES.contains(&lower.as_str()) {
            Ok(Self::Markup)
        } else {
            Err(AppError::InvalidInput(format!(
                "Unknown strategy '{value}' (expected probe, dictionary or markup)"
            )))
        }
    }
}

/// What the DOM probe does when a label matches but its value is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbePolicy {
    /// The first label that structurally matches decides the field, even if empty
    #[default]
    StopOnMatch,
    /// Keep trying later variants until one yields a non-empty value
    SkipEmpty,
}

impl FromStr for ProbePolicy {
    type Err = AppError;

    fn from_str(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "stop-on-match" | "stop" => Ok(Self::StopOnMatch),
            "skip-empty" | "skip" => Ok(Self::SkipEmpty),
            _ => Err(AppError::InvalidInput(format!(
                "Unknown probe policy '{value}' (expected stop-on-match or skip-empty)"
            ))),
        }
    }
}

/// Serialization format for the extracted notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Parses a format name, returning `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_lowercase();
        if YAML_ALIASES.contains(&lower.as_str()) {
            Some(Self::Yaml)
        } else if lower == "json" {
            Some(Self::Json)
        } else {
            None
        }
    }
}

impl From<&str> for OutputFormat {
    fn from(value: &str) -> Self {
        // Unknown formats fall back to YAML; callers decide whether to warn.
        Self::parse(value).unwrap_or_default()
    }
}
