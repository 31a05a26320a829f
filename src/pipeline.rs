use crate::config::ResolvedConfig;
use crate::errors::AppResult;
use crate::extractor::{
    DictionaryExtractor, Extractor, FragmentSource, ItemHandle, ItemSelectors, ListItemSplitter,
    MarkupExtractor, Page, ProbeExtractor,
};
use crate::models::{Notice, PageLanguage, Strategy};
use tracing::{info, warn};

/// Extracts every notice of a result page with the configured strategy.
///
/// Items are processed one at a time in document order. Any structural
/// failure aborts the whole run and no partial result is returned.
///
/// # Errors
///
/// Returns an error if:
/// - A selector or pattern of the configuration is invalid
/// - The list container is missing from the page (DOM strategies)
/// - An item cannot be queried
pub fn extract_notices(source: &str, config: &ResolvedConfig) -> AppResult<Vec<Notice>> {
    info!(strategy = config.strategy.display_name(), "Extracting notices");
    let notices = match config.strategy {
        Strategy::Markup => extract_from_markup(source, &ListItemSplitter::new()?, config)?,
        Strategy::Probe | Strategy::Dictionary => extract_from_dom(source, config)?,
    };
    info!(notices = notices.len(), "Extraction completed");
    Ok(notices)
}

/// Runs the markup extractor over the fragments produced by `fragments`,
/// using the configured markup patterns.
pub fn extract_from_markup<F: FragmentSource>(
    source: &str,
    fragments: &F,
    config: &ResolvedConfig,
) -> AppResult<Vec<Notice>> {
    let extractor = MarkupExtractor::new(&config.markup_patterns()?)?;
    let items = fragments.fragments(source);
    info!(items_found = items.len(), "Item fragments found");

    if config.show_html {
        for item in &items {
            info!("ITEM HTML:\n{}", item.trim());
        }
    }
    extractor.extract_all(items.iter().copied())
}

fn extract_from_dom(source: &str, config: &ResolvedConfig) -> AppResult<Vec<Notice>> {
    let selectors = ItemSelectors::compile(&config.selectors)?;
    let page = Page::parse(source);
    let items = page.items(&selectors)?;
    info!(items_found = items.len(), "Items found");

    match config.strategy {
        Strategy::Probe => {
            let lang = page.language();
            info!(page_lang = lang.as_str(), "Page language detected");
            let extractor = ProbeExtractor::new(
                &config.label_catalog(),
                PageLanguage::from_tag(&lang),
                config.probe_policy,
            );
            run_items(&extractor, &items, config.show_html)
        }
        _ => {
            let extractor = DictionaryExtractor::new(config.synonym_dictionary());
            run_items(&extractor, &items, config.show_html)
        }
    }
}

fn run_items<H, E>(extractor: &E, items: &[H], show_html: bool) -> AppResult<Vec<Notice>>
where
    H: ItemHandle,
    E: Extractor<H>,
{
    let mut notices = Vec::with_capacity(items.len());
    for item in items {
        if show_html {
            match item.inner_html() {
                Ok(html) => info!("ITEM HTML:\n{}", html.trim()),
                Err(e) => warn!(error = %e, "Failed to get item inner HTML"),
            }
        }
        notices.push(extractor.extract(item)?);
    }
    Ok(notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    const PAGE: &str = r#"<html lang="en"><body>
        <ul class="list-group">
          <li class="list-group-item">
            <strong>AO 1</strong>
            <div class="d-table-cell">PO/CA:</div><div class="d-table-cell">Council</div>
            <div class="d-table-cell">MO/AC:</div><div class="d-table-cell">Commune</div>
          </li>
        </ul>
    </body></html>"#;

    fn config(strategy: Strategy) -> ResolvedConfig {
        ResolvedConfig {
            strategy,
            ..ResolvedConfig::default()
        }
    }

    #[test]
    fn every_strategy_extracts_the_item() {
        for strategy in [Strategy::Probe, Strategy::Dictionary, Strategy::Markup] {
            let notices = extract_notices(PAGE, &config(strategy)).unwrap();
            assert_eq!(notices.len(), 1, "{strategy:?}");
            assert_eq!(notices[0].number_title, "AO 1", "{strategy:?}");
            assert_eq!(notices[0].authority, "Council", "{strategy:?}");
        }
    }

    #[test]
    fn missing_container_fails_dom_strategies() {
        let result = extract_notices("<html><body></body></html>", &config(Strategy::Probe));
        assert!(matches!(result, Err(AppError::StructuralError(_))));
    }

    #[test]
    fn missing_items_yield_empty_markup_result() {
        let notices =
            extract_notices("<html><body></body></html>", &config(Strategy::Markup)).unwrap();
        assert!(notices.is_empty());
    }

    #[test]
    fn show_html_does_not_change_results() {
        let mut with_dump = config(Strategy::Dictionary);
        with_dump.show_html = true;
        assert_eq!(
            extract_notices(PAGE, &with_dump).unwrap(),
            extract_notices(PAGE, &config(Strategy::Dictionary)).unwrap()
        );
    }
}
