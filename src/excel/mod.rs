//! Row source: decode report bytes into rows and serialize rows back
//! to a workbook with barcode cells patched.

pub mod reader;
pub mod writer;

pub use reader::read_rows;
pub use writer::write_patched;

/// Column holding the barcode on an item row (zero-based).
pub const BARCODE_COLUMN: usize = 8;
