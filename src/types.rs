use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//==============================================================================
// Spreadsheet cells and rows
//==============================================================================

/// A single spreadsheet cell value, typed when the sheet is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Render the cell the way it appears in the report. Whole numbers
    /// drop the trailing `.0` so codes like `12345` keep their digit form.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Cell::Bool(b) => b.to_string(),
        }
    }
}

/// One spreadsheet row: an ordered sequence of nullable cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(pub Vec<Option<Cell>>);

impl Row {
    pub fn get(&self, idx: usize) -> Option<&Cell> {
        self.0.get(idx).and_then(|c| c.as_ref())
    }

    /// Trimmed display text of the cell, or None when absent or blank.
    pub fn text(&self, idx: usize) -> Option<String> {
        let text = self.get(idx)?.display();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Best-effort numeric read: numbers pass through, text is parsed,
    /// everything else (including parse failures) is None.
    pub fn number(&self, idx: usize) -> Option<f64> {
        match self.get(idx)? {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Bool(_) => None,
        }
    }

    /// Immutable snapshot of the row as display strings, keyed by column
    /// index. Built once at parse time and never mutated.
    pub fn snapshot(&self) -> Vec<Option<String>> {
        self.0
            .iter()
            .map(|c| c.as_ref().map(Cell::display))
            .collect()
    }
}

//==============================================================================
// Domain records
//==============================================================================

/// One inventory line item recovered from a paired data/quantity row block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    /// Zero-based position of the data row in the source sheet.
    pub row_index: usize,
    pub name: String,
    pub nomenclature_code: Option<String>,
    pub barcode: Option<String>,
    /// On-hand quantity from the paired row; fixed after parsing.
    pub quantity_warehouse: Option<f64>,
    /// Counted quantity entered during the stocktake.
    pub quantity_actual: Option<f64>,
    pub raw_row: Vec<Option<String>>,
    pub raw_quantity_row: Vec<Option<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemRecord {
    pub fn new(
        row_index: usize,
        name: String,
        barcode: Option<String>,
        quantity_warehouse: Option<f64>,
        raw_row: Vec<Option<String>>,
        raw_quantity_row: Vec<Option<String>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            row_index,
            name,
            nomenclature_code: None,
            barcode,
            quantity_warehouse,
            quantity_actual: None,
            raw_row,
            raw_quantity_row,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The single active unit of work: one uploaded report and its metadata.
/// The original bytes stay inside the server; they are re-read on every
/// export and never serialized outward.
#[derive(Debug, Clone)]
pub struct WorkSession {
    pub id: String,
    pub filename: String,
    pub original_bytes: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkSession {
    pub fn new(filename: String, original_bytes: Vec<u8>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            filename,
            original_bytes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Outward-facing session view. Counts are derived from the current
/// record set whenever the summary is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub id: String,
    pub filename: String,
    pub total_products: usize,
    pub products_with_barcode: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Barcode update payload. This is a full-field replace, not a merge:
/// a field omitted from the request becomes null on the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordUpdate {
    pub barcode: Option<String>,
    pub quantity_actual: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_whole_number() {
        assert_eq!(Cell::Number(12345.0).display(), "12345");
    }

    #[test]
    fn test_cell_display_fractional_number() {
        assert_eq!(Cell::Number(12.5).display(), "12.5");
    }

    #[test]
    fn test_cell_display_text() {
        assert_eq!(Cell::Text("Товар".to_string()).display(), "Товар");
    }

    #[test]
    fn test_row_text_trims_and_blanks_to_none() {
        let row = Row(vec![
            Some(Cell::Text("  Товар А  ".to_string())),
            Some(Cell::Text("   ".to_string())),
            None,
        ]);
        assert_eq!(row.text(0), Some("Товар А".to_string()));
        assert_eq!(row.text(1), None);
        assert_eq!(row.text(2), None);
        assert_eq!(row.text(7), None);
    }

    #[test]
    fn test_row_number_from_number_cell() {
        let row = Row(vec![Some(Cell::Number(12.0))]);
        assert_eq!(row.number(0), Some(12.0));
    }

    #[test]
    fn test_row_number_parses_text() {
        let row = Row(vec![
            Some(Cell::Text(" 7.5 ".to_string())),
            Some(Cell::Text("abc".to_string())),
        ]);
        assert_eq!(row.number(0), Some(7.5));
        assert_eq!(row.number(1), None);
    }

    #[test]
    fn test_row_snapshot_keeps_nulls() {
        let row = Row(vec![
            Some(Cell::Text("x".to_string())),
            None,
            Some(Cell::Number(3.0)),
        ]);
        assert_eq!(
            row.snapshot(),
            vec![Some("x".to_string()), None, Some("3".to_string())]
        );
    }

    #[test]
    fn test_update_defaults_are_null() {
        let update = RecordUpdate::default();
        assert!(update.barcode.is_none());
        assert!(update.quantity_actual.is_none());
    }
}
