//! Workbook reader built on calamine.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::{StocktakeError, StocktakeResult};
use crate::types::{Cell, Row};

/// Decode workbook bytes (.xls or .xlsx) into the rows of the first
/// sheet, addressed by absolute position.
///
/// calamine ranges are anchored at the first used cell, so the leading
/// row/column gap is padded back in; `row_index` values derived from the
/// result always match the sheet.
pub fn read_rows(bytes: &[u8]) -> StocktakeResult<Vec<Row>> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| StocktakeError::Input(format!("failed to open workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| StocktakeError::Input("workbook has no sheets".to_string()))?
        .map_err(|e| StocktakeError::Input(format!("failed to read sheet: {e}")))?;

    let (start_row, start_col) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::with_capacity(start_row + range.height());
    rows.resize(start_row, Row::default());

    for cells in range.rows() {
        let mut row: Vec<Option<Cell>> = vec![None; start_col];
        row.extend(cells.iter().map(convert_cell));
        rows.push(Row(row));
    }

    Ok(rows)
}

fn convert_cell(data: &Data) -> Option<Cell> {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(Cell::Text(s.clone())),
        Data::Float(f) => Some(Cell::Number(*f)),
        Data::Int(i) => Some(Cell::Number(*i as f64)),
        Data::Bool(b) => Some(Cell::Bool(*b)),
        Data::DateTime(dt) => Some(Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Cell::Text(s.clone())),
        Data::Error(_) => None,
    }
}
