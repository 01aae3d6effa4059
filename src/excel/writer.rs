//! Workbook writer built on rust_xlsxwriter.

use std::collections::HashMap;

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::{StocktakeError, StocktakeResult};
use crate::types::{Cell, Row};

use super::BARCODE_COLUMN;

/// Serialize `rows` to a fresh workbook, overwriting the barcode cell of
/// every row listed in `patches`. All other cells are written through
/// unchanged, so the export keeps the source layout.
pub fn write_patched(rows: &[Row], patches: &HashMap<usize, String>) -> StocktakeResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.0.iter().enumerate() {
            if col_idx == BARCODE_COLUMN && patches.contains_key(&row_idx) {
                continue;
            }
            let (r, c) = (row_idx as u32, col_idx as u16);
            match cell {
                Some(Cell::Text(s)) => {
                    worksheet.write_string(r, c, s).map_err(write_failed)?;
                }
                Some(Cell::Number(n)) => {
                    worksheet.write_number(r, c, *n).map_err(write_failed)?;
                }
                Some(Cell::Bool(b)) => {
                    worksheet.write_boolean(r, c, *b).map_err(write_failed)?;
                }
                None => {}
            }
        }
    }

    for (row_idx, barcode) in patches {
        worksheet
            .write_string(*row_idx as u32, BARCODE_COLUMN as u16, barcode)
            .map_err(write_failed)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| StocktakeError::Internal(format!("failed to serialize workbook: {e}")))
}

fn write_failed(e: XlsxError) -> StocktakeError {
    StocktakeError::Internal(format!("failed to write cell: {e}"))
}
