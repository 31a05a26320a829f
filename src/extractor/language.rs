use scraper::Html;

/// Reads the `lang` attribute of the document root, lower-cased and trimmed.
///
/// A missing attribute yields an empty string, which downstream code treats
/// as "not French".
pub fn detect_language(document: &Html) -> String {
    document
        .root_element()
        .value()
        .attr("lang")
        .map(|lang| lang.trim().to_lowercase())
        .unwrap_or_default()
}
