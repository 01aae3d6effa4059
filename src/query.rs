//! Record filtering and pagination.

use serde::Deserialize;

use crate::types::ItemRecord;

pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Filter over the session's records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordFilter {
    /// Some(true) keeps records with a barcode, Some(false) those without.
    pub has_barcode: Option<bool>,
    /// Case-insensitive substring over `name`. Matched literally; the
    /// needle is never interpreted as a pattern.
    pub search: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &ItemRecord) -> bool {
        if let Some(want) = self.has_barcode {
            if record.barcode.is_some() != want {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !record
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Filter and window `records`, which are kept in ascending `row_index`
/// order (parse order). Returns the total match count alongside the
/// requested page, so `skip` past the end still reports the total.
pub fn list(
    records: &[ItemRecord],
    filter: &RecordFilter,
    skip: usize,
    limit: usize,
) -> (usize, Vec<ItemRecord>) {
    let matched: Vec<&ItemRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    let total = matched.len();
    let page = matched
        .into_iter()
        .skip(skip)
        .take(limit)
        .cloned()
        .collect();
    (total, page)
}
