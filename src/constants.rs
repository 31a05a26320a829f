// Data source URL (advanced search, tender notices only)
pub const DEFAULT_URL: &str = "https://www.armp.cm/recherche_avancee?recherche_avancee_do=1&reference_avis=&maitre_ouvrage=0&region=0&departement=0&type_publication%5B%5D=AO";

// Selectors
pub const CONTAINER_SELECTOR: &str = ".list-group";
pub const ITEM_SELECTOR: &str = "li.list-group-item";
pub const TITLE_SELECTOR: &str = "strong";
pub const CELL_SELECTOR: &str = "div.d-table-cell";

// Markup patterns
pub const ITEM_FRAGMENT_PATTERN: &str = r#"(?s)<li[^>]*class="list-group-item[^"]*".*?</li>"#;
pub const TITLE_PATTERN: &str = r"(?s)<strong[^>]*>(.*?)</strong>";
/// Label/value pattern; `{label}` is replaced by the label expression, which
/// must open its cell.
pub const LABEL_VALUE_PATTERN: &str =
    r#"(?s)>\s*{label}\s*:\s*</div>\s*<div class="d-table-cell[^>]*>\s*(.*?)\s*</div>"#;

// Environment overrides
pub const FORMAT_ENV: &str = "FORMAT";
pub const OUTPUT_FILE_ENV: &str = "OUTPUT_FILE";
pub const SHOW_HTML_ENV: &str = "SHOW_HTML";
pub const TRUTHY_VALUES: &[&str] = &["1", "true", "yes", "y", "on"];

// Strategy and format aliases
pub const PROBE_ALIASES: &[&str] = &["probe", "dom"];
pub const DICTIONARY_ALIASES: &[&str] = &["dictionary", "dict", "cells"];
pub const MARKUP_ALIASES: &[&str] = &["markup", "regex", "raw"];
pub const YAML_ALIASES: &[&str] = &["yaml", "yml"];
