use super::dom::ItemHandle;
use super::labels::SynonymDictionary;
use super::{Extractor, NoticeBuilder};
use crate::errors::{AppResult, LookupError};
use crate::models::{Field, Notice};
use tracing::debug;

/// Single pass over an item's label/value cells.
///
/// Cells alternate label, value, label, value... Each label is normalized and
/// looked up in the synonym dictionary; the first non-empty value seen for a
/// field is kept. A trailing unpaired cell is ignored.
#[derive(Debug, Clone, Default)]
pub struct DictionaryExtractor {
    synonyms: SynonymDictionary,
}

impl DictionaryExtractor {
    pub fn new(synonyms: SynonymDictionary) -> Self {
        Self { synonyms }
    }

    fn cells<H: ItemHandle + ?Sized>(item: &H) -> AppResult<Vec<String>> {
        match item.cell_texts() {
            Ok(cells) => Ok(cells),
            Err(LookupError::Miss(reason)) => {
                debug!(reason = reason.as_str(), "Cell lookup failed");
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl<H: ItemHandle + ?Sized> Extractor<H> for DictionaryExtractor {
    fn extract(&self, item: &H) -> AppResult<Notice> {
        let mut builder = NoticeBuilder::default();

        match item.title() {
            Ok(title) => {
                builder.set_if_empty(Field::NumberTitle, title.as_deref().unwrap_or_default());
            }
            Err(LookupError::Miss(reason)) => {
                debug!(reason = reason.as_str(), "Title lookup failed");
            }
            Err(err) => return Err(err.into()),
        }

        let cells = Self::cells(item)?;
        for pair in cells.chunks_exact(2) {
            let (label, value) = (&pair[0], &pair[1]);
            match self.synonyms.lookup(label) {
                Some(field) => {
                    if !builder.set_if_empty(field, value.trim()) && builder.is_set(field) {
                        debug!(field = field.name(), label = label.trim(), "Duplicate label ignored");
                    }
                }
                None => debug!(label = label.trim(), "Unrecognized label"),
            }
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use pretty_assertions::assert_eq;

    struct Cells {
        title: Option<&'static str>,
        cells: Result<Vec<&'static str>, LookupError>,
    }

    impl Cells {
        fn new(cells: &[&'static str]) -> Self {
            Self {
                title: None,
                cells: Ok(cells.to_vec()),
            }
        }
    }

    impl ItemHandle for Cells {
        fn title(&self) -> Result<Option<String>, LookupError> {
            Ok(self.title.map(str::to_string))
        }

        fn value_after_label(&self, _label: &str) -> Result<Option<String>, LookupError> {
            Ok(None)
        }

        fn cell_texts(&self) -> Result<Vec<String>, LookupError> {
            self.cells
                .clone()
                .map(|cells| cells.into_iter().map(str::to_string).collect())
        }

        fn inner_html(&self) -> Result<String, LookupError> {
            Ok(String::new())
        }
    }

    fn extract(item: &Cells) -> AppResult<Notice> {
        DictionaryExtractor::default().extract(item)
    }

    #[test]
    fn maps_cells_through_synonyms() {
        let item = Cells::new(&["MO/AC:", "City Council", "Type:", "Works"]);
        assert_eq!(
            extract(&item).unwrap(),
            Notice {
                authority: "City Council".into(),
                notice_type: "Works".into(),
                ..Notice::default()
            }
        );
    }

    #[test]
    fn accented_and_spaced_labels_match() {
        let item = Cells::new(&[
            "RÉGION :",
            " Centre ",
            "Date de clôture",
            "15/03/2025",
            "Heure de clôture:",
            "10:00",
            "Publié le :",
            "01/03/2025",
        ]);
        let notice = extract(&item).unwrap();
        assert_eq!(notice.region, "Centre");
        assert_eq!(notice.closing_date, "15/03/2025");
        assert_eq!(notice.closing_time, "10:00");
        assert_eq!(notice.published_on, "01/03/2025");
    }

    #[test]
    fn later_duplicate_never_overwrites() {
        let item = Cells::new(&["PO/CA:", "First", "MO/AC:", "Second", "Amount", "1", "Montant", "2"]);
        let notice = extract(&item).unwrap();
        assert_eq!(notice.authority, "First");
        assert_eq!(notice.amount, "1");
    }

    #[test]
    fn empty_first_value_lets_later_value_fill() {
        let item = Cells::new(&["Amount:", "  ", "Montant:", "3 000 000"]);
        assert_eq!(extract(&item).unwrap().amount, "3 000 000");
    }

    #[test]
    fn trailing_unpaired_cell_is_ignored() {
        let item = Cells::new(&["Type:", "Services", "Region:"]);
        let notice = extract(&item).unwrap();
        assert_eq!(notice.notice_type, "Services");
        assert_eq!(notice.region, "");
    }

    #[test]
    fn unrecognized_labels_leave_everything_empty_but_title() {
        let mut item = Cells::new(&["Référence", "123", "Lot", "2"]);
        item.title = Some("AO 5/2025");
        assert_eq!(
            extract(&item).unwrap(),
            Notice {
                number_title: "AO 5/2025".into(),
                ..Notice::default()
            }
        );
    }

    #[test]
    fn cell_lookup_miss_yields_empty_notice() {
        let item = Cells {
            title: None,
            cells: Err(LookupError::Miss("stale".into())),
        };
        assert!(extract(&item).unwrap().is_blank());
    }

    #[test]
    fn unreachable_item_is_fatal() {
        let item = Cells {
            title: None,
            cells: Err(LookupError::Unreachable("detached".into())),
        };
        assert!(matches!(extract(&item), Err(AppError::StructuralError(_))));
    }

    #[test]
    fn custom_synonyms_extend_the_table() {
        let mut synonyms = SynonymDictionary::default();
        synonyms.extend([("Pays", Field::Country)]);
        let item = Cells::new(&["Pays :", "Cameroun"]);
        let notice = DictionaryExtractor::new(synonyms).extract(&item).unwrap();
        assert_eq!(notice.country, "Cameroun");
    }
}
