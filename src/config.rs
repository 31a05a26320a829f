use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::extractor::{
    label_pattern, LabelCatalog, MarkupExtractor, MarkupPatterns, SynonymDictionary,
};
use crate::models::{Field, OutputFormat, ProbePolicy, Strategy};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// CSS selectors locating the result list and the parts of each item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Element wrapping the result list
    pub container: String,
    /// One notice inside the container
    pub item: String,
    /// Bold lead text of an item
    pub title: String,
    /// Label element probed by the DOM probe
    pub label: String,
    /// Value element expected right after a label
    pub value: String,
    /// Alternating label/value cells walked by the dictionary matcher
    pub cell: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: CONTAINER_SELECTOR.to_string(),
            item: ITEM_SELECTOR.to_string(),
            title: TITLE_SELECTOR.to_string(),
            label: CELL_SELECTOR.to_string(),
            value: CELL_SELECTOR.to_string(),
            cell: CELL_SELECTOR.to_string(),
        }
    }
}

impl SelectorConfig {
    fn validate(&self) -> AppResult<()> {
        let entries = [
            ("container", &self.container),
            ("item", &self.item),
            ("title", &self.title),
            ("label", &self.label),
            ("value", &self.value),
            ("cell", &self.cell),
        ];
        for (name, selector) in entries {
            if selector.trim().is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "Selector '{name}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Resolved configuration with all values filled in.
///
/// Built from defaults, optionally a TOML file, then environment variables and
/// finally command-line flags, each layer overriding the previous one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Page to fetch when no local input is given
    pub url: String,
    /// Saved page to read instead of fetching `url`
    pub input: Option<PathBuf>,
    /// Extraction strategy run over the items
    pub strategy: Strategy,
    /// DOM probe behavior on a label with an empty value
    pub probe_policy: ProbePolicy,
    /// Output serialization format
    pub format: OutputFormat,
    /// Output file; stdout when unset
    pub output: Option<PathBuf>,
    /// Log each item's inner markup before extraction
    pub show_html: bool,
    pub selectors: SelectorConfig,
    /// Per-field label overrides for the DOM probe
    pub labels: Option<LabelCatalog>,
    /// Extra synonyms for the dictionary matcher (label -> field)
    pub synonyms: BTreeMap<String, Field>,
    /// Per-field label expressions replacing the markup extractor's defaults
    pub markup: BTreeMap<String, Vec<String>>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            input: None,
            strategy: Strategy::default(),
            probe_policy: ProbePolicy::default(),
            format: OutputFormat::default(),
            output: None,
            show_html: false,
            selectors: SelectorConfig::default(),
            labels: None,
            synonyms: BTreeMap::new(),
            markup: BTreeMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Keys left out of the file keep their defaults. Unknown keys are rejected
    /// so typos are not silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, `ParseError` if the TOML is
    /// malformed or has unknown keys, `InvalidInput` if a selector is empty or a
    /// markup field is unknown, and `RegexError` if a markup label does not compile.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let config: ResolvedConfig = toml::from_str(contents)
            .map_err(|e| AppError::ParseError(format!("Failed to parse config: {e}")))?;
        config.selectors.validate()?;
        MarkupExtractor::new(&config.markup_patterns()?)?;
        Ok(config)
    }

    /// Applies `FORMAT`, `OUTPUT_FILE` and `SHOW_HTML` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Blank values are ignored. An unknown format logs a warning and falls
    /// back to YAML. `SHOW_HTML` can only switch the dump on.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = non_blank(lookup(FORMAT_ENV)) {
            self.format = resolve_format(&format);
        }
        if let Some(path) = non_blank(lookup(OUTPUT_FILE_ENV)) {
            self.output = Some(PathBuf::from(path));
        }
        if let Some(flag) = non_blank(lookup(SHOW_HTML_ENV)) {
            self.show_html |= is_truthy(&flag);
        }
    }

    /// Default label catalog with this configuration's overrides applied.
    pub fn label_catalog(&self) -> LabelCatalog {
        match &self.labels {
            Some(overrides) => LabelCatalog::default().merged(overrides),
            None => LabelCatalog::default(),
        }
    }

    /// Default synonym dictionary extended with this configuration's synonyms.
    pub fn synonym_dictionary(&self) -> SynonymDictionary {
        let mut dictionary = SynonymDictionary::default();
        dictionary.extend(self.synonyms.iter().map(|(label, field)| (label, *field)));
        dictionary
    }

    /// Default markup patterns with this configuration's label expressions applied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the markup table names an unknown field.
    pub fn markup_patterns(&self) -> AppResult<MarkupPatterns> {
        self.markup
            .iter()
            .try_fold(MarkupPatterns::default(), |patterns, (name, labels)| {
                let field = Field::from_name(name).ok_or_else(|| {
                    AppError::InvalidInput(format!("Unknown field '{name}' in markup table"))
                })?;
                let rules = labels.iter().map(|label| label_pattern(label)).collect();
                Ok(patterns.with_rule(field, rules))
            })
    }
}

/// Parses a user-supplied format name, falling back to YAML with a warning.
pub fn resolve_format(value: &str) -> OutputFormat {
    OutputFormat::parse(value).unwrap_or_else(|| {
        warn!(format = value, "Unknown format; defaulting to yaml");
        OutputFormat::Yaml
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_truthy(value: &str) -> bool {
    TRUTHY_VALUES.contains(&value.trim().to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageLanguage;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_values() {
        let config = ResolvedConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.strategy, Strategy::Dictionary);
        assert_eq!(config.probe_policy, ProbePolicy::StopOnMatch);
        assert_eq!(config.format, OutputFormat::Yaml);
        assert!(config.output.is_none());
        assert!(!config.show_html);
        assert_eq!(config.selectors.item, "li.list-group-item");
    }

    #[test]
    fn minimal_toml_is_parsed_and_defaults_apply() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            strategy = "probe"
            format = "json"
            "#,
        )
        .unwrap();

        let config = ResolvedConfig::from_toml_file(tmp.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Probe);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.selectors, SelectorConfig::default());
    }

    #[test]
    fn unknown_key_errors() {
        let result = ResolvedConfig::from_toml_str(
            r#"
            strategy = "markup"
            retries = 3
            "#,
        );
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn empty_selector_errors() {
        let result = ResolvedConfig::from_toml_str(
            r#"
            [selectors]
            item = "  "
            "#,
        );
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn label_and_synonym_overrides_are_merged() {
        let config = ResolvedConfig::from_toml_str(
            r#"
            [labels.closing_date]
            french = ["Date limite"]
            english = ["Deadline"]

            [synonyms]
            "Date limite" = "closing_date"
            "Pays" = "country"
            "#,
        )
        .unwrap();

        let variants = config.label_catalog().build(PageLanguage::English);
        assert_eq!(variants.get(Field::ClosingDate), ["Deadline", "Date limite"]);
        assert_eq!(variants.get(Field::Authority), ["PO/CA:", "MO/AC:"]);

        let dictionary = config.synonym_dictionary();
        assert_eq!(dictionary.lookup("DATE LIMITE :"), Some(Field::ClosingDate));
        assert_eq!(dictionary.lookup("Pays:"), Some(Field::Country));
        assert_eq!(dictionary.lookup("MO/AC"), Some(Field::Authority));
    }

    #[test]
    fn markup_overrides_replace_named_fields_only() {
        let config = ResolvedConfig::from_toml_str(
            r#"
            [markup]
            type = ["Nature", "Type"]
            "#,
        )
        .unwrap();

        let patterns = config.markup_patterns().unwrap();
        assert_eq!(
            patterns.patterns(Field::Type),
            [label_pattern("Nature"), label_pattern("Type")]
        );
        assert_eq!(
            patterns.patterns(Field::Authority),
            MarkupPatterns::default().patterns(Field::Authority)
        );
    }

    #[test]
    fn unknown_markup_field_errors() {
        let result = ResolvedConfig::from_toml_str(
            r#"
            [markup]
            deadline = ["Deadline"]
            "#,
        );
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn invalid_markup_label_errors() {
        let result = ResolvedConfig::from_toml_str(
            r#"
            [markup]
            region = ["Region("]
            "#,
        );
        assert!(matches!(result, Err(AppError::RegexError(_))));
    }

    #[test]
    fn env_overrides_format_output_and_show_html() {
        let mut config = ResolvedConfig::default();
        config.apply_env_with(env(&[
            ("FORMAT", " JSON "),
            ("OUTPUT_FILE", "notices.json"),
            ("SHOW_HTML", "yes"),
        ]));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output, Some(PathBuf::from("notices.json")));
        assert!(config.show_html);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = ResolvedConfig {
            format: OutputFormat::Json,
            ..ResolvedConfig::default()
        };
        config.apply_env_with(env(&[("FORMAT", "  "), ("OUTPUT_FILE", "")]));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.output.is_none());
    }

    #[test]
    fn unknown_env_format_defaults_to_yaml() {
        let mut config = ResolvedConfig {
            format: OutputFormat::Json,
            ..ResolvedConfig::default()
        };
        config.apply_env_with(env(&[("FORMAT", "xml")]));
        assert_eq!(config.format, OutputFormat::Yaml);
    }

    #[test]
    fn show_html_env_cannot_switch_dump_off() {
        let mut config = ResolvedConfig {
            show_html: true,
            ..ResolvedConfig::default()
        };
        config.apply_env_with(env(&[("SHOW_HTML", "0")]));
        assert!(config.show_html);
    }

    #[test]
    fn truthy_values() {
        for value in ["1", "true", "YES", "y", " on "] {
            assert!(is_truthy(value), "{value}");
        }
        for value in ["0", "false", "no", "off", "maybe"] {
            assert!(!is_truthy(value), "{value}");
        }
    }
}
