//! Shared helpers: build report workbooks in memory so tests never need
//! binary fixtures on disk.

#![allow(dead_code)] // not every test binary uses every helper

use rust_xlsxwriter::Workbook;
use stocktake::Cell;

pub fn text(s: &str) -> Option<Cell> {
    Some(Cell::Text(s.to_string()))
}

pub fn number(n: f64) -> Option<Cell> {
    Some(Cell::Number(n))
}

/// Serialize rows to workbook bytes at their absolute positions.
pub fn workbook_bytes(rows: &[Vec<Option<Cell>>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Some(Cell::Text(s)) => {
                    sheet.write_string(r as u32, c as u16, s).unwrap();
                }
                Some(Cell::Number(n)) => {
                    sheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                Some(Cell::Bool(b)) => {
                    sheet.write_boolean(r as u32, c as u16, *b).unwrap();
                }
                None => {}
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// A report: title row, seven more metadata rows, then the body.
pub fn report_bytes(body: Vec<Vec<Option<Cell>>>) -> Vec<u8> {
    let mut rows: Vec<Vec<Option<Cell>>> = Vec::new();
    rows.push(vec![text("Остатки товаров на складе")]);
    rows.push(vec![text("ООО \"Тест\"")]);
    for _ in 2..8 {
        rows.push(vec![]);
    }
    rows.extend(body);
    workbook_bytes(&rows)
}

/// An item data row with the barcode in the ninth cell.
pub fn item_row(name: &str, barcode: Option<&str>) -> Vec<Option<Cell>> {
    let mut row = vec![text(name), None, None, None, None, None, None, None];
    row.push(barcode.map(|b| Cell::Text(b.to_string())));
    row
}

/// The paired quantity row carrying the unit label.
pub fn quantity_row(qty: f64) -> Vec<Option<Cell>> {
    vec![None, text("Кол."), number(qty)]
}

/// A minimal two-item report.
pub fn two_item_report() -> Vec<u8> {
    report_bytes(vec![
        item_row("Товар А", None),
        quantity_row(12.0),
        item_row("Товар Б", Some("4601234567890")),
        quantity_row(3.0),
    ])
}
