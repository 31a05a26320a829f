use super::normalize::normalize_label;
use crate::models::{Field, PageLanguage};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Built-in label spellings per field, French first, English second.
const DEFAULT_LABELS: &[(Field, &[&str], &[&str])] = &[
    (Field::Authority, &["MO/AC:"], &["PO/CA:"]),
    (Field::Type, &["Type", "Type:"], &["Type", "Type:"]),
    (
        Field::Region,
        &["Région", "Région:", "Region", "Region:"],
        &["Region", "Region:"],
    ),
    (
        Field::Amount,
        &["Montant", "Montant:"],
        &["Amount", "Amount:"],
    ),
    (
        Field::PublishedOn,
        &["Publié le", "Publié le :", "Publié le:"],
        &["Published on", "Published on:", "Published:"],
    ),
    (
        Field::ClosingDate,
        &["Date de clôture", "Date de cloture"],
        &["Closing date"],
    ),
    (
        Field::ClosingTime,
        &["Heure de clôture", "Heure de cloture"],
        &["Closing time"],
    ),
];

/// Built-in synonyms. Keys are normalized again on load, so accents are fine.
const DEFAULT_SYNONYMS: &[(&str, Field)] = &[
    ("mo/ac", Field::Authority),
    ("po/ca", Field::Authority),
    ("type", Field::Type),
    ("region", Field::Region),
    ("montant", Field::Amount),
    ("amount", Field::Amount),
    ("publie le", Field::PublishedOn),
    ("published on", Field::PublishedOn),
    ("published", Field::PublishedOn),
    ("date de cloture", Field::ClosingDate),
    ("closing date", Field::ClosingDate),
    ("heure de cloture", Field::ClosingTime),
    ("closing time", Field::ClosingTime),
];

/// French and English spellings of one field's label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BilingualLabels {
    #[serde(default)]
    pub french: Vec<String>,
    #[serde(default)]
    pub english: Vec<String>,
}

impl BilingualLabels {
    fn from_static(french: &[&str], english: &[&str]) -> Self {
        Self {
            french: french.iter().map(|s| s.to_string()).collect(),
            english: english.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// All spellings, native language first. Duplicates across languages are kept.
    pub fn ordered(&self, language: PageLanguage) -> Vec<String> {
        let (first, second) = match language {
            PageLanguage::French => (&self.french, &self.english),
            PageLanguage::English => (&self.english, &self.french),
        };
        first.iter().chain(second.iter()).cloned().collect()
    }
}

/// Label spellings for every probed field.
///
/// Deserializes from a table keyed by field name, e.g.
/// `[labels.closing_date]` with `french` and `english` arrays.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, BilingualLabels>")]
pub struct LabelCatalog {
    fields: BTreeMap<Field, BilingualLabels>,
}

impl Default for LabelCatalog {
    fn default() -> Self {
        let fields = DEFAULT_LABELS
            .iter()
            .map(|(field, french, english)| (*field, BilingualLabels::from_static(french, english)))
            .collect();
        Self { fields }
    }
}

impl TryFrom<BTreeMap<String, BilingualLabels>> for LabelCatalog {
    type Error = String;

    fn try_from(raw: BTreeMap<String, BilingualLabels>) -> Result<Self, Self::Error> {
        let mut fields = BTreeMap::new();
        for (name, labels) in raw {
            let field = Field::from_name(&name)
                .ok_or_else(|| format!("unknown field '{name}' in label table"))?;
            fields.insert(field, labels);
        }
        Ok(Self { fields })
    }
}

impl LabelCatalog {
    /// Returns a catalog where every field present in `overrides` replaces
    /// this catalog's entry for that field.
    pub fn merged(mut self, overrides: &LabelCatalog) -> Self {
        for (field, labels) in &overrides.fields {
            self.fields.insert(*field, labels.clone());
        }
        self
    }

    /// Orders each field's spellings for a page in `language`.
    pub fn build(&self, language: PageLanguage) -> LabelVariants {
        let entries = self
            .fields
            .iter()
            .map(|(field, labels)| (*field, labels.ordered(language)))
            .collect();
        LabelVariants { entries }
    }
}

/// Per-field label spellings in probing order for one page language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVariants {
    entries: Vec<(Field, Vec<String>)>,
}

impl LabelVariants {
    pub fn get(&self, field: Field) -> &[String] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, labels)| labels.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.entries.iter().map(|(f, labels)| (*f, labels.as_slice()))
    }
}

/// Maps normalized label text to the field it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymDictionary {
    entries: HashMap<String, Field>,
}

impl Default for SynonymDictionary {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_SYNONYMS.iter().copied())
    }
}

impl SynonymDictionary {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Field)>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(label, field)| (normalize_label(label.as_ref()), field))
            .collect();
        Self { entries }
    }

    /// Adds or replaces synonyms; keys are normalized first.
    pub fn extend<I, S>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (S, Field)>,
        S: AsRef<str>,
    {
        for (label, field) in pairs {
            self.entries.insert(normalize_label(label.as_ref()), field);
        }
    }

    /// Looks up a raw label as it appears on the page.
    pub fn lookup(&self, raw_label: &str) -> Option<Field> {
        self.entries.get(&normalize_label(raw_label)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
