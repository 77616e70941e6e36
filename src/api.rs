use crate::analyzer::ArchiveAnalyzer;
use crate::config::{Config, ServerConfig};
use crate::error::AnalyzerError;
use crate::utils::sanitize_filename;
use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Fallback name for uploads without a usable client filename
const DEFAULT_UPLOAD_NAME: &str = "upload.zip";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<ArchiveAnalyzer>,
    upload_dir: Arc<PathBuf>,
    max_upload_bytes: usize,
}

impl AppState {
    /// Builds handler state from the service configuration
    pub fn new(config: &Config) -> Self {
        Self {
            analyzer: Arc::new(ArchiveAnalyzer::new(config.analysis.clone())),
            upload_dir: Arc::new(config.upload_dir.clone()),
            max_upload_bytes: config.server.max_upload_bytes,
        }
    }

    /// Directory uploads are spooled into
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

/// Successful analysis response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Rendered project summary
    pub summary: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Current status
    pub status: String,
}

/// Error returned to HTTP clients as `{"error": message}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 400 with the given message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 500 with the given message
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// HTTP status of the response
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message placed in the `error` field
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replaces the body-limit message with one naming the configured limit
    fn with_upload_limit(self, max_upload_bytes: usize) -> Self {
        if self.status != StatusCode::PAYLOAD_TOO_LARGE {
            return self;
        }
        Self {
            status: self.status,
            message: format!("Upload exceeds the {} byte limit", max_upload_bytes),
        }
    }
}

impl From<AnalyzerError> for ApiError {
    fn from(err: AnalyzerError) -> Self {
        if err.is_client_error() {
            Self::bad_request(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(err: MultipartRejection) -> Self {
        Self {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// An upload endpoint: its path, the multipart field it reads and its "missing file" message
#[derive(Debug, Clone, Copy)]
pub struct UploadRoute {
    /// URL path
    pub path: &'static str,
    /// Multipart field carrying the zip archive
    pub field: &'static str,
    /// Error message when the field is absent
    pub missing_message: &'static str,
}

/// `POST /analyze`
pub const ANALYZE_ROUTE: UploadRoute = UploadRoute {
    path: "/analyze",
    field: "file",
    missing_message: "No file provided",
};

/// `POST /api/convert-code`
pub const CONVERT_CODE_ROUTE: UploadRoute = UploadRoute {
    path: "/api/convert-code",
    field: "zipfile",
    missing_message: "No file uploaded",
};

/// Create the application router with all routes
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(ANALYZE_ROUTE.path, post(analyze_upload))
        .route(CONVERT_CODE_ROUTE.path, post(convert_code))
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "healthy".to_string(),
    })
}

async fn analyze_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    handle_upload(&state, ANALYZE_ROUTE, multipart).await
}

async fn convert_code(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    handle_upload(&state, CONVERT_CODE_ROUTE, multipart).await
}

/// Spools the uploaded archive to disk and summarizes it on a blocking thread
async fn handle_upload(
    state: &AppState,
    route: UploadRoute,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, route = route.path, "Received upload request");

    let mut multipart = multipart.map_err(|e| {
        warn!(%request_id, "Rejected non-multipart request: {}", e);
        ApiError::from(e)
    })?;

    let spooled = spool_upload(&mut multipart, route.field, state.upload_dir())
        .await
        .map_err(|e| {
            warn!(%request_id, status = %e.status(), "Upload could not be read: {}", e.message());
            e.with_upload_limit(state.max_upload_bytes)
        })?;
    let Some(upload) = spooled else {
        warn!(%request_id, field = route.field, "Upload field missing");
        return Err(ApiError::bad_request(route.missing_message));
    };
    info!(%request_id, path = %upload.path().display(), "Saved upload");

    let analyzer = Arc::clone(&state.analyzer);
    let result = tokio::task::spawn_blocking(move || {
        // the upload is deleted when it drops at the end of this closure
        analyzer.analyze(upload.path())
    })
    .await
    .map_err(|e| ApiError::internal(format!("Analysis task failed: {}", e)))?;

    match result {
        Ok(summary) => {
            info!(%request_id, project = %summary.project_name, "Summary generated");
            Ok(Json(SummaryResponse {
                summary: summary.render(),
            }))
        }
        Err(e) => {
            error!(%request_id, extraction = e.is_extraction_failure(), "Analysis failed: {}", e);
            Err(ApiError::from(e))
        }
    }
}

/// Writes the first multipart field named `field_name` into a temp file under `dir`.
///
/// Returns `None` when the request has no such field.
async fn spool_upload(
    multipart: &mut Multipart,
    field_name: &str,
    dir: &Path,
) -> Result<Option<NamedTempFile>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            continue;
        }
        return write_field(field, dir).await.map(Some);
    }
    Ok(None)
}

async fn write_field(mut field: Field<'_>, dir: &Path) -> Result<NamedTempFile, ApiError> {
    let file_name = field
        .file_name()
        .and_then(sanitize_filename)
        .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());

    let mut file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(&format!("-{}", file_name))
        .tempfile_in(dir)
        .map_err(|e| ApiError::internal(format!("Failed to store upload: {}", e)))?;

    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk)
            .map_err(|e| ApiError::internal(format!("Failed to store upload: {}", e)))?;
    }
    file.flush()
        .map_err(|e| ApiError::internal(format!("Failed to store upload: {}", e)))?;

    Ok(file)
}
