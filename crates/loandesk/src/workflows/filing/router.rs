use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{FilenameMatchResult, RequirementId};
use super::repository::{ChecklistRepository, DocumentOwner, FolderRecord, FolderRepository};
use super::service::{DocumentFilingService, FilingRecommendation, FilingServiceError};

/// Router builder exposing the classification and folder endpoints.
pub fn filing_router<C, F>(service: Arc<DocumentFilingService<C, F>>) -> Router
where
    C: ChecklistRepository + 'static,
    F: FolderRepository + 'static,
{
    Router::new()
        .route("/api/v1/documents/classify", post(classify_handler::<C, F>))
        .route(
            "/api/v1/documents/checklist-matches",
            post(checklist_handler::<C, F>),
        )
        .route("/api/v1/folders/bootstrap", post(bootstrap_handler::<C, F>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) client_id: String,
    #[serde(default)]
    pub(crate) project_id: Option<String>,
    pub(crate) file_name: String,
    #[serde(default)]
    pub(crate) summary: Option<String>,
    #[serde(default)]
    pub(crate) keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyResponse {
    pub(crate) file_name: String,
    #[serde(flatten)]
    pub(crate) recommendation: FilingRecommendation,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChecklistMatchRequest {
    pub(crate) client_id: String,
    #[serde(default)]
    pub(crate) project_id: Option<String>,
    pub(crate) file_name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChecklistMatchResponse {
    pub(crate) file_name: String,
    pub(crate) matches: Vec<FilenameMatchResult>,
    pub(crate) best: Option<RequirementId>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BootstrapRequest {
    pub(crate) client_id: String,
    #[serde(default)]
    pub(crate) project_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BootstrapResponse {
    pub(crate) folders: Vec<FolderRecord>,
}

fn owner_from_parts(client_id: String, project_id: Option<String>) -> DocumentOwner {
    DocumentOwner {
        client_id,
        project_id: project_id.filter(|p| !p.trim().is_empty()),
    }
}

pub(crate) async fn classify_handler<C, F>(
    State(service): State<Arc<DocumentFilingService<C, F>>>,
    axum::Json(request): axum::Json<ClassifyRequest>,
) -> Response
where
    C: ChecklistRepository + 'static,
    F: FolderRepository + 'static,
{
    if request.file_name.trim().is_empty() {
        let payload = json!({ "error": "file_name must not be empty" });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let owner = owner_from_parts(request.client_id, request.project_id);
    match service.classify_document(
        &owner,
        &request.file_name,
        request.summary.as_deref(),
        &request.keywords,
    ) {
        Ok(recommendation) => {
            let body = ClassifyResponse {
                file_name: request.file_name,
                recommendation,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn checklist_handler<C, F>(
    State(service): State<Arc<DocumentFilingService<C, F>>>,
    axum::Json(request): axum::Json<ChecklistMatchRequest>,
) -> Response
where
    C: ChecklistRepository + 'static,
    F: FolderRepository + 'static,
{
    if request.file_name.trim().is_empty() {
        let payload = json!({ "error": "file_name must not be empty" });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let owner = owner_from_parts(request.client_id, request.project_id);
    match service.checklist_matches(&owner, &request.file_name) {
        Ok(matches) => {
            let best = matches.first().map(|m| m.requirement_id.clone());
            let body = ChecklistMatchResponse {
                file_name: request.file_name,
                matches,
                best,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn bootstrap_handler<C, F>(
    State(service): State<Arc<DocumentFilingService<C, F>>>,
    axum::Json(request): axum::Json<BootstrapRequest>,
) -> Response
where
    C: ChecklistRepository + 'static,
    F: FolderRepository + 'static,
{
    let owner = owner_from_parts(request.client_id, request.project_id);
    match service.ensure_starter_folders(&owner) {
        Ok(folders) => {
            (StatusCode::OK, axum::Json(BootstrapResponse { folders })).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: FilingServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
