//! Reconciliation: regenerate export bytes from the original upload and
//! the current record set.
//!
//! Every export starts from the pristine original bytes and applies one
//! barcode-cell overwrite per record that currently has a barcode. No
//! state from a previous export is consulted, so a barcode that was set
//! and later cleared reads as absent in the next export.

use std::collections::HashMap;

use crate::error::StocktakeResult;
use crate::excel;
use crate::types::ItemRecord;

/// Filename prefix applied to every export.
pub const EXPORT_PREFIX: &str = "updated_";

/// Rebuild the report with the current barcode values patched in.
pub fn build_export(original_bytes: &[u8], records: &[ItemRecord]) -> StocktakeResult<Vec<u8>> {
    let rows = excel::read_rows(original_bytes)?;

    let patches: HashMap<usize, String> = records
        .iter()
        .filter_map(|r| r.barcode.clone().map(|b| (r.row_index, b)))
        .collect();

    excel::write_patched(&rows, &patches)
}

pub fn export_filename(original: &str) -> String {
    format!("{EXPORT_PREFIX}{original}")
}
