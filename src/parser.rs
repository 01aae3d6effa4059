//! Report parser: recovers item records from the two-row report layout.
//!
//! A 1C stock report lists each item as a pair of physical rows: a data
//! row (name, barcode) followed by a quantity row whose second cell is
//! the unit label. Repeated headers, totals and nomenclature-code
//! continuation rows are interleaved with the pairs. Parsing is a
//! cursor scan over the rows; any cell-level failure degrades to a null
//! field, never to a parse error.

use crate::error::StocktakeResult;
use crate::excel::{self, BARCODE_COLUMN};
use crate::types::{ItemRecord, Row};

/// Leading report-metadata rows that never contain item data.
const HEADER_ROWS: usize = 8;
/// The second cell of every quantity row carries this unit label.
const UNIT_LABEL: &str = "Кол.";
/// Column of the quantity row holding the on-hand quantity.
const QUANTITY_COLUMN: usize = 2;
/// First-cell values marking repeated headers and totals, never items.
const NOISE_MARKERS: [&str; 5] = ["НaN", "Номенклатура", "Счет", "nan", "Итого"];

/// Parse report bytes into item records, in sheet order.
///
/// Only an undecodable file is an error; malformed individual rows are
/// skipped or produce records with null fields.
pub fn parse(bytes: &[u8]) -> StocktakeResult<Vec<ItemRecord>> {
    let rows = excel::read_rows(bytes)?;
    Ok(parse_rows(&rows))
}

/// Scan rows for paired item/quantity blocks.
pub fn parse_rows(rows: &[Row]) -> Vec<ItemRecord> {
    let mut records: Vec<ItemRecord> = Vec::new();
    let mut idx = HEADER_ROWS;

    // Stop once fewer than two rows remain: a lone trailing row can
    // never form a pair.
    while idx + 1 < rows.len() {
        let row = &rows[idx];
        let name = match row.text(0) {
            Some(name) => name,
            None => {
                idx += 1;
                continue;
            }
        };

        if NOISE_MARKERS.contains(&name.as_str()) {
            idx += 1;
            continue;
        }

        let next = &rows[idx + 1];
        if next.text(1).as_deref() != Some(UNIT_LABEL) {
            // No paired quantity row: stray text, discard.
            idx += 1;
            continue;
        }

        if is_nomenclature_code(&name) {
            // Continuation row: back-patch the item it belongs to, but
            // never override a code that is already set.
            if let Some(last) = records.last_mut() {
                if last.nomenclature_code.is_none() {
                    last.nomenclature_code = Some(name);
                }
            }
            idx += 2;
            continue;
        }

        records.push(ItemRecord::new(
            idx,
            name,
            row.text(BARCODE_COLUMN),
            next.number(QUANTITY_COLUMN),
            row.snapshot(),
            next.snapshot(),
        ));
        idx += 2;
    }

    records
}

/// A first cell that is all digits once internal spaces are stripped is
/// a nomenclature code, not an item name.
fn is_nomenclature_code(name: &str) -> bool {
    let stripped: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}
