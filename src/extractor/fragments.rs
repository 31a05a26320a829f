use crate::constants::ITEM_FRAGMENT_PATTERN;
use crate::errors::AppResult;
use regex::Regex;

/// Splits a page source into raw item fragments for the markup extractor.
pub trait FragmentSource {
    fn fragments<'a>(&self, page: &'a str) -> Vec<&'a str>;
}

/// Lenient splitter that matches `<li class="list-group-item…">…</li>` spans
/// as plain text.
///
/// Matching is lazy up to the first `</li>`, so an item containing a nested
/// list is cut short. Good enough for the result page, not a parser.
#[derive(Debug, Clone)]
pub struct ListItemSplitter {
    pattern: Regex,
}

impl ListItemSplitter {
    pub fn new() -> AppResult<Self> {
        Self::with_pattern(ITEM_FRAGMENT_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> AppResult<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl FragmentSource for ListItemSplitter {
    fn fragments<'a>(&self, page: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(page).map(|m| m.as_str()).collect()
    }
}
