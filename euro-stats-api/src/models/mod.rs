use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

pub mod group_detail;
pub mod group_summary;
pub mod players;

/// Records produced by one extractor pass, plus how many blocks were dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extracted<T> {
    pub records: Vec<T>,
    pub dropped: usize,
}

impl<T> Default for Extracted<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            dropped: 0,
        }
    }
}

impl<T> Extracted<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Collected, trimmed text of an element.
pub(crate) fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant matching `selector`.
pub(crate) fn field_text(
    element: ElementRef,
    selector: &Selector,
    field: &'static str,
) -> Result<String, RecordError> {
    element
        .select(selector)
        .next()
        .map(text_of)
        .ok_or(RecordError::MissingField(field))
}

/// Like [`field_text`], but an empty value is also an error.
pub(crate) fn required_text(
    element: ElementRef,
    selector: &Selector,
    field: &'static str,
) -> Result<String, RecordError> {
    let text = field_text(element, selector, field)?;
    if text.is_empty() {
        return Err(RecordError::EmptyField(field));
    }

    Ok(text)
}
