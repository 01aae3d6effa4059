//! Session lifecycle: at most one active work session, replaced atomically.

use std::sync::RwLock;

use chrono::Utc;
use tracing::info;

use crate::error::{StocktakeError, StocktakeResult};
use crate::parser;
use crate::query::{self, RecordFilter};
use crate::reconcile;
use crate::types::{ItemRecord, RecordUpdate, SessionSummary, WorkSession};

struct ActiveSession {
    session: WorkSession,
    records: Vec<ItemRecord>,
}

/// Holds the single active session behind one exclusive lock.
///
/// A replacement upload is parsed before the old state is touched, and
/// the swap is a single assignment under the write lock: concurrent
/// readers see the old session in full or the new one in full, never a
/// mix. A writer still holding a record id from a superseded session
/// fails with `NotFound` instead of mutating the wrong records.
#[derive(Default)]
pub struct SessionManager {
    inner: RwLock<Option<ActiveSession>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active session with a freshly parsed upload.
    ///
    /// All-or-nothing: if parsing fails the previous session and its
    /// records stay untouched. Teardown of the old state happens only
    /// as part of the swap itself.
    pub fn replace(&self, filename: &str, bytes: Vec<u8>) -> StocktakeResult<SessionSummary> {
        let records = parser::parse(&bytes)?;
        let session = WorkSession::new(filename.to_string(), bytes);
        let summary = summarize(&session, &records);

        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        *guard = Some(ActiveSession { session, records });

        info!(
            "session {} replaced: {} products from '{}'",
            summary.id, summary.total_products, filename
        );
        Ok(summary)
    }

    /// Current session summary, with counts recomputed from the records.
    pub fn current(&self) -> StocktakeResult<Option<SessionSummary>> {
        let guard = self.inner.read().map_err(|_| poisoned())?;
        Ok(guard
            .as_ref()
            .map(|active| summarize(&active.session, &active.records)))
    }

    /// Filtered, windowed record listing in ascending `row_index` order.
    pub fn list_records(
        &self,
        filter: &RecordFilter,
        skip: usize,
        limit: usize,
    ) -> StocktakeResult<(usize, Vec<ItemRecord>)> {
        let guard = self.inner.read().map_err(|_| poisoned())?;
        let active = guard.as_ref().ok_or(StocktakeError::NoActiveSession)?;
        Ok(query::list(&active.records, filter, skip, limit))
    }

    /// Apply a barcode update to one record.
    ///
    /// Full-field replace: fields omitted from `update` become null.
    /// Callers that want to keep `quantity_actual` while changing the
    /// barcode must resend both.
    pub fn update_record(&self, id: &str, update: RecordUpdate) -> StocktakeResult<ItemRecord> {
        let mut guard = self.inner.write().map_err(|_| poisoned())?;
        let active = guard.as_mut().ok_or(StocktakeError::NoActiveSession)?;

        let record = active
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StocktakeError::NotFound(id.to_string()))?;

        record.barcode = update.barcode;
        record.quantity_actual = update.quantity_actual;
        record.updated_at = Utc::now();
        active.session.updated_at = record.updated_at;

        Ok(record.clone())
    }

    /// Regenerate the export from the pristine original bytes and the
    /// current records. Returns the download filename and the bytes.
    pub fn export(&self) -> StocktakeResult<(String, Vec<u8>)> {
        let guard = self.inner.read().map_err(|_| poisoned())?;
        let active = guard.as_ref().ok_or(StocktakeError::NoActiveSession)?;

        let bytes = reconcile::build_export(&active.session.original_bytes, &active.records)?;
        Ok((
            reconcile::export_filename(&active.session.filename),
            bytes,
        ))
    }
}

fn summarize(session: &WorkSession, records: &[ItemRecord]) -> SessionSummary {
    SessionSummary {
        id: session.id.clone(),
        filename: session.filename.clone(),
        total_products: records.len(),
        products_with_barcode: records.iter().filter(|r| r.barcode.is_some()).count(),
        created_at: session.created_at,
        updated_at: session.updated_at,
    }
}

fn poisoned() -> StocktakeError {
    StocktakeError::Internal("session lock poisoned".to_string())
}
