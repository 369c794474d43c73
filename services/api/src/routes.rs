use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use loandesk::error::AppError;
use loandesk::workflows::filing::domain::{ChecklistRequirement, FilenameMatchResult};
use loandesk::workflows::filing::repository::{ChecklistRepository, FolderRepository};
use loandesk::workflows::filing::{
    filing_router, import_checklist_from_reader, match_checklist, DocumentFilingService,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ChecklistPreviewRequest {
    /// Raw CRM checklist export, pasted inline.
    pub(crate) csv: String,
    /// Optional filename to score against the imported requirements.
    #[serde(default)]
    pub(crate) file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChecklistPreviewResponse {
    pub(crate) requirements: Vec<ChecklistRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) matches: Option<Vec<FilenameMatchResult>>,
}

pub(crate) fn with_filing_routes<C, F>(
    service: Arc<DocumentFilingService<C, F>>,
) -> axum::Router
where
    C: ChecklistRepository + 'static,
    F: FolderRepository + 'static,
{
    filing_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/checklist/preview",
            axum::routing::post(checklist_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Parse a pasted checklist export without persisting anything, optionally
/// scoring a filename against the parsed requirements. Lets operators sanity
/// check a CRM export before wiring it into a client record.
pub(crate) async fn checklist_preview_endpoint(
    Json(payload): Json<ChecklistPreviewRequest>,
) -> Result<Json<ChecklistPreviewResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let requirements = import_checklist_from_reader(reader)?;

    let matches = payload
        .file_name
        .filter(|name| !name.trim().is_empty())
        .map(|name| match_checklist(&name, &requirements));

    Ok(Json(ChecklistPreviewResponse {
        requirements,
        matches,
    }))
}
