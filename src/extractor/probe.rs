use super::dom::ItemHandle;
use super::labels::{LabelCatalog, LabelVariants};
use super::{Extractor, NoticeBuilder};
use crate::errors::{AppResult, LookupError};
use crate::models::{Field, Notice, PageLanguage, ProbePolicy};
use tracing::debug;

/// Probes each field's label variants in page-language order.
///
/// For every field, the first variant with a label element followed by a
/// value element decides the value. Under [`ProbePolicy::StopOnMatch`] that
/// holds even when the value text is empty.
#[derive(Debug, Clone)]
pub struct ProbeExtractor {
    variants: LabelVariants,
    policy: ProbePolicy,
}

impl ProbeExtractor {
    pub fn new(catalog: &LabelCatalog, language: PageLanguage, policy: ProbePolicy) -> Self {
        Self {
            variants: catalog.build(language),
            policy,
        }
    }

    fn label_value<H: ItemHandle + ?Sized>(&self, item: &H, labels: &[String]) -> AppResult<String> {
        for label in labels {
            match item.value_after_label(label) {
                Ok(Some(value)) => {
                    if !value.is_empty() || self.policy == ProbePolicy::StopOnMatch {
                        return Ok(value);
                    }
                    debug!(label = label.as_str(), "Label matched with empty value");
                }
                Ok(None) => {}
                Err(LookupError::Miss(reason)) => {
                    debug!(label = label.as_str(), reason = reason.as_str(), "Label lookup failed");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(String::new())
    }
}

impl<H: ItemHandle + ?Sized> Extractor<H> for ProbeExtractor {
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

        for (field, labels) in self.variants.iter() {
            let value = self.label_value(item, labels)?;
            builder.set_if_empty(field, &value);
        }

        Ok(builder.build())
    }
}
