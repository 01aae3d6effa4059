//! API request handlers
//!
//! Thin extraction/serialization over the session manager; all logic
//! lives below this layer.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::StocktakeError;
use crate::query::{RecordFilter, DEFAULT_PAGE_LIMIT};
use crate::types::{ItemRecord, RecordUpdate, SessionSummary};

use super::server::AppState;

/// Error body shared by every failing endpoint.
#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Wrapper mapping domain errors to HTTP statuses.
pub struct ApiError(StocktakeError);

impl From<StocktakeError> for ApiError {
    fn from(err: StocktakeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StocktakeError::Input(_) => StatusCode::BAD_REQUEST,
            StocktakeError::NotFound(_) | StocktakeError::NoActiveSession => {
                StatusCode::NOT_FOUND
            }
            StocktakeError::Io(_) | StocktakeError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {}", self.0);
        }
        (
            status,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(VersionResponse {
        version: state.version.clone(),
    })
}

/// Upload response
#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub session_id: String,
    pub total_products: usize,
    pub products_with_barcode: usize,
}

/// POST /api/upload - Upload a stock report and replace the active session
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut filename = "report.xlsx".to_string();
    let mut bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| StocktakeError::Input(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            if let Some(name) = field.file_name() {
                filename = name.to_string();
            }
            let data = field
                .bytes()
                .await
                .map_err(|e| StocktakeError::Input(format!("failed to read upload: {e}")))?;
            bytes = Some(data.to_vec());
        }
    }

    let bytes = bytes.ok_or_else(|| StocktakeError::Input("missing 'file' field".to_string()))?;
    let summary = state.sessions.replace(&filename, bytes)?;

    Ok(Json(UploadResponse {
        success: true,
        session_id: summary.id,
        total_products: summary.total_products,
        products_with_barcode: summary.products_with_barcode,
    }))
}

/// Session response
#[derive(Serialize)]
pub struct SessionResponse {
    pub session: Option<SessionSummary>,
}

/// GET /api/session - Current session summary (null when nothing uploaded)
pub async fn session(State(state): State<Arc<AppState>>) -> ApiResult<Json<SessionResponse>> {
    Ok(Json(SessionResponse {
        session: state.sessions.current()?,
    }))
}

/// Product list query parameters
#[derive(Deserialize)]
pub struct ProductQuery {
    pub has_barcode: Option<bool>,
    pub search: Option<String>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

/// Product list response
#[derive(Serialize)]
pub struct ProductListResponse {
    pub total: usize,
    pub products: Vec<ItemRecord>,
}

/// GET /api/products - Filtered, paginated product listing
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Json<ProductListResponse>> {
    let filter = RecordFilter {
        has_barcode: query.has_barcode,
        search: query.search,
    };
    let (total, products) = state.sessions.list_records(&filter, query.skip, query.limit)?;
    Ok(Json(ProductListResponse { total, products }))
}

/// Update response
#[derive(Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub product: ItemRecord,
}

/// PUT /api/products/:id/barcode - Replace a record's barcode fields
pub async fn update_barcode(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<RecordUpdate>,
) -> ApiResult<Json<UpdateResponse>> {
    let product = state.sessions.update_record(&id, update)?;
    Ok(Json(UpdateResponse {
        success: true,
        product,
    }))
}

/// GET /api/download - Patched report as an attachment
pub async fn download(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let (filename, bytes) = state.sessions.export()?;
    let headers = [
        (
            header::CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
