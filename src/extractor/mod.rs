//! Notice extraction from result list items.
//!
//! Three interchangeable strategies turn one list item into one [`Notice`]:
//!
//! - [`ProbeExtractor`] probes a parsed item for each field's label variants,
//!   in the order preferred by the page language.
//! - [`DictionaryExtractor`] walks the item's label/value cells once and maps
//!   normalized labels through a [`SynonymDictionary`].
//! - [`MarkupExtractor`] runs label patterns directly on an item's raw markup.
//!
//! The first two consume an [`ItemHandle`]; the markup extractor consumes a
//! `str` fragment produced by a [`FragmentSource`].

mod dictionary;
mod dom;
mod fragments;
mod labels;
mod language;
mod markup;
mod normalize;
mod probe;

use crate::errors::AppResult;
use crate::models::{Field, Notice};

// Re-export public API
pub use dictionary::DictionaryExtractor;
pub use dom::{HtmlItem, ItemHandle, ItemSelectors, Page};
pub use fragments::{FragmentSource, ListItemSplitter};
pub use labels::{BilingualLabels, LabelCatalog, LabelVariants, SynonymDictionary};
pub use language::detect_language;
pub use markup::{label_pattern, MarkupExtractor, MarkupPatterns};
pub use normalize::normalize_label;
pub use probe::ProbeExtractor;

/// Turns one list item into a [`Notice`].
///
/// `I` is the input shape the implementation understands: an [`ItemHandle`]
/// for DOM-based strategies, `str` for the markup strategy.
pub trait Extractor<I: ?Sized> {
    /// Extracts a single notice. Missing fields are left empty; only a
    /// structural failure of the item is returned as an error.
    fn extract(&self, item: &I) -> AppResult<Notice>;

    /// Extracts every item in order, stopping at the first structural failure.
    fn extract_all<'i, It>(&self, items: It) -> AppResult<Vec<Notice>>
    where
        It: IntoIterator<Item = &'i I>,
        I: 'i,
        Self: Sized,
    {
        items.into_iter().map(|item| self.extract(item)).collect()
    }
}

/// Accumulates field values for one notice; the first value set for a field wins.
#[derive(Debug, Default)]
pub(crate) struct NoticeBuilder {
    notice: Notice,
}

impl NoticeBuilder {
    /// Stores `value` unless the field already holds a non-empty value.
    /// Returns whether the value was stored.
    pub(crate) fn set_if_empty(&mut self, field: Field, value: &str) -> bool {
        let slot = self.notice.slot_mut(field);
        if !slot.is_empty() || value.is_empty() {
            return false;
        }
        slot.push_str(value);
        true
    }

    pub(crate) fn is_set(&self, field: Field) -> bool {
        !self.notice.get(field).is_empty()
    }

    pub(crate) fn build(self) -> Notice {
        self.notice
    }
}
