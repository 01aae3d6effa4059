//! Stocktake - barcode collection over 1C stock reports
//!
//! This library parses a legacy accounting-system spreadsheet export
//! into inventory line items, lets barcodes and counted quantities be
//! attached to them through a review workflow, and regenerates an
//! equivalent spreadsheet with only the barcode cells patched.
//!
//! # Features
//!
//! - Two-row-per-item report parsing (data row + quantity row), with
//!   nomenclature-code continuation rows and header/total noise handling
//! - Single-session lifecycle with atomic replace-on-upload
//! - Reconciliation export that always starts from the original bytes
//! - Axum HTTP API for upload, review, update and download
//!
//! # Example
//!
//! ```no_run
//! use stocktake::parser;
//!
//! let bytes = std::fs::read("report.xls")?;
//! let records = parser::parse(&bytes)?;
//!
//! println!("Items: {}", records.len());
//! # Ok::<(), stocktake::StocktakeError>(())
//! ```

pub mod api;
pub mod error;
pub mod excel;
pub mod parser;
pub mod query;
pub mod reconcile;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{StocktakeError, StocktakeResult};
pub use session::SessionManager;
pub use types::{Cell, ItemRecord, Row, SessionSummary, WorkSession};
