use super::language::detect_language;
use crate::config::SelectorConfig;
use crate::errors::{AppError, AppResult, LookupError};
use scraper::{ElementRef, Html, Selector};

/// Query capabilities the DOM-based extractors need from one list item.
///
/// Lookups are scoped to the item's own subtree. A `LookupError::Miss`
/// only affects the field being looked up; `LookupError::Unreachable`
/// means the item cannot be queried at all.
pub trait ItemHandle {
    /// Trimmed text of the item's title element, if present.
    fn title(&self) -> Result<Option<String>, LookupError>;

    /// Trimmed text of the value element immediately following the label
    /// element whose text reads `label`. Whitespace, case and a trailing
    /// colon are not significant when comparing label text.
    ///
    /// `Ok(Some(""))` means the label matched but its value is empty.
    fn value_after_label(&self, label: &str) -> Result<Option<String>, LookupError>;

    /// Raw text of the item's label/value cells in document order.
    fn cell_texts(&self) -> Result<Vec<String>, LookupError>;

    /// Inner markup of the item, for diagnostics.
    fn inner_html(&self) -> Result<String, LookupError>;
}

/// Compiled CSS selectors used to locate items and their cells.
#[derive(Debug)]
pub struct ItemSelectors {
    container: Selector,
    item: Selector,
    title: Selector,
    label: Selector,
    value: Selector,
    cell: Selector,
}

impl ItemSelectors {
    pub fn compile(config: &SelectorConfig) -> AppResult<Self> {
        Ok(Self {
            container: parse_selector(&config.container)?,
            item: parse_selector(&config.item)?,
            title: parse_selector(&config.title)?,
            label: parse_selector(&config.label)?,
            value: parse_selector(&config.value)?,
            cell: parse_selector(&config.cell)?,
        })
    }
}

fn parse_selector(css: &str) -> AppResult<Selector> {
    Selector::parse(css).map_err(|e| AppError::SelectorError(format!("'{css}': {e:?}")))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Comparison key for label text: whitespace collapsed, case folded and a
/// trailing colon dropped, so `"Closing date :"` reads as `"closing date"`.
fn label_key(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches(':').trim_end().to_lowercase()
}

/// A parsed result page.
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Lower-cased `lang` attribute of the root element, or an empty string.
    pub fn language(&self) -> String {
        detect_language(&self.document)
    }

    /// Items of the first list container, in document order.
    ///
    /// # Errors
    ///
    /// Returns `StructuralError` when no element matches the container selector.
    pub fn items<'a>(&'a self, selectors: &'a ItemSelectors) -> AppResult<Vec<HtmlItem<'a>>> {
        let container = self
            .document
            .select(&selectors.container)
            .next()
            .ok_or_else(|| {
                AppError::StructuralError("no element matches the list container selector".into())
            })?;

        Ok(container
            .select(&selectors.item)
            .map(|element| HtmlItem::new(element, selectors))
            .collect())
    }
}

/// One list item inside a parsed [`Page`].
#[derive(Clone, Copy)]
pub struct HtmlItem<'a> {
    element: ElementRef<'a>,
    selectors: &'a ItemSelectors,
}

impl<'a> HtmlItem<'a> {
    pub fn new(element: ElementRef<'a>, selectors: &'a ItemSelectors) -> Self {
        Self { element, selectors }
    }
}

impl ItemHandle for HtmlItem<'_> {
    fn title(&self) -> Result<Option<String>, LookupError> {
        Ok(self
            .element
            .select(&self.selectors.title)
            .next()
            .map(|el| element_text(el).trim().to_string()))
    }

    fn value_after_label(&self, label: &str) -> Result<Option<String>, LookupError> {
        let wanted = label_key(label);
        for candidate in self.element.select(&self.selectors.label) {
            if label_key(&element_text(candidate)) != wanted {
                continue;
            }
            let next = candidate.next_siblings().find_map(ElementRef::wrap);
            if let Some(value) = next.filter(|el| self.selectors.value.matches(el)) {
                return Ok(Some(element_text(value).trim().to_string()));
            }
        }
        Ok(None)
    }

    fn cell_texts(&self) -> Result<Vec<String>, LookupError> {
        Ok(self
            .element
            .select(&self.selectors.cell)
            .map(element_text)
            .collect())
    }

    fn inner_html(&self) -> Result<String, LookupError> {
        Ok(self.element.inner_html())
    }
}
