//! End-to-end parser tests over real workbook bytes.

mod common;

use common::{item_row, quantity_row, report_bytes, text, two_item_report};
use pretty_assertions::assert_eq;
use stocktake::{parser, StocktakeError};

// ═══════════════════════════════════════════════════════════════════════════
// ITEM PAIR RECOVERY
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_parses_item_pairs_in_order() {
    let records = parser::parse(&two_item_report()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].row_index, 8);
    assert_eq!(records[0].name, "Товар А");
    assert_eq!(records[0].quantity_warehouse, Some(12.0));
    assert_eq!(records[0].barcode, None);

    assert_eq!(records[1].row_index, 10);
    assert_eq!(records[1].name, "Товар Б");
    assert_eq!(records[1].quantity_warehouse, Some(3.0));
    assert_eq!(records[1].barcode, Some("4601234567890".to_string()));
}

#[test]
fn test_row_indices_strictly_increasing() {
    let bytes = report_bytes(vec![
        item_row("Товар А", None),
        quantity_row(1.0),
        vec![text("Итого")],
        item_row("Товар Б", None),
        quantity_row(2.0),
        item_row("Товар В", None),
        quantity_row(3.0),
    ]);
    let records = parser::parse(&bytes).unwrap();

    assert_eq!(records.len(), 3);
    for pair in records.windows(2) {
        assert!(pair[0].row_index < pair[1].row_index);
    }
}

#[test]
fn test_raw_rows_snapshot_both_source_rows() {
    let records = parser::parse(&two_item_report()).unwrap();

    let record = &records[1];
    assert_eq!(record.raw_row[0], Some("Товар Б".to_string()));
    assert_eq!(record.raw_row[8], Some("4601234567890".to_string()));
    assert_eq!(record.raw_quantity_row[1], Some("Кол.".to_string()));
    assert_eq!(record.raw_quantity_row[2], Some("3".to_string()));
}

#[test]
fn test_numeric_quantity_from_whole_float() {
    // Quantities land in the sheet as floats; 12.0 must read as 12.0,
    // not fail or truncate.
    let bytes = report_bytes(vec![item_row("Товар А", None), quantity_row(12.0)]);
    let records = parser::parse(&bytes).unwrap();
    assert_eq!(records[0].quantity_warehouse, Some(12.0));
}

// ═══════════════════════════════════════════════════════════════════════════
// NOMENCLATURE CODE CONTINUATION ROWS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_all_digit_row_backpatches_previous_record() {
    let bytes = report_bytes(vec![
        item_row("Товар А", None),
        quantity_row(5.0),
        item_row("12345", None),
        quantity_row(5.0),
    ]);
    let records = parser::parse(&bytes).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].nomenclature_code, Some("12345".to_string()));
}

#[test]
fn test_code_with_internal_spaces_still_recognized() {
    let bytes = report_bytes(vec![
        item_row("Товар А", None),
        quantity_row(5.0),
        item_row("12 345", None),
        quantity_row(5.0),
    ]);
    let records = parser::parse(&bytes).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].nomenclature_code, Some("12 345".to_string()));
}

#[test]
fn test_later_code_rows_never_override() {
    let bytes = report_bytes(vec![
        item_row("Товар А", None),
        quantity_row(5.0),
        item_row("111", None),
        quantity_row(5.0),
        item_row("222", None),
        quantity_row(5.0),
    ]);
    let records = parser::parse(&bytes).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].nomenclature_code, Some("111".to_string()));
}

// ═══════════════════════════════════════════════════════════════════════════
// NOISE HANDLING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_headers_totals_and_blanks_skipped() {
    let bytes = report_bytes(vec![
        vec![text("Номенклатура")],
        vec![],
        item_row("Товар А", None),
        quantity_row(1.0),
        vec![text("Итого")],
        vec![text("Счет")],
        vec![text("nan")],
    ]);
    let records = parser::parse(&bytes).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Товар А");
}

#[test]
fn test_unpaired_text_row_discarded_silently() {
    let bytes = report_bytes(vec![
        vec![text("комментарий оператора")],
        item_row("Товар А", None),
        quantity_row(2.0),
    ]);
    let records = parser::parse(&bytes).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].row_index, 9);
}

#[test]
fn test_metadata_rows_never_produce_records() {
    // Nothing but the eight leading metadata rows.
    let bytes = report_bytes(vec![]);
    assert!(parser::parse(&bytes).unwrap().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURE MODES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_undecodable_bytes_are_an_input_error() {
    let result = parser::parse(b"this is not a spreadsheet");
    assert!(matches!(result, Err(StocktakeError::Input(_))));
}

#[test]
fn test_empty_workbook_parses_to_no_records() {
    let bytes = common::workbook_bytes(&[vec![text("x")]]);
    assert!(parser::parse(&bytes).unwrap().is_empty());
}
