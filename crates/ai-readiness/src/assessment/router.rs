use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::AssessmentCatalog;
use super::domain::AssessmentError;
use super::record::AssessmentId;
use super::report::{csv_file_name, export_date};
use super::report::views::StoredAssessmentView;
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError, SubmitAssessment};

/// Router builder exposing assessment intake, results, and admin endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments/catalog", get(catalog_handler))
        .route(
            "/api/v1/assessments",
            post(submit_handler::<R>).get(overview_handler::<R>),
        )
        .route("/api/v1/assessments/export.csv", get(export_handler::<R>))
        .route("/api/v1/assessments/:assessment_id", get(results_handler::<R>))
        .route(
            "/api/v1/assessments/:assessment_id/brief",
            get(brief_handler::<R>),
        )
        .route("/api/v1/quick-wins", post(quick_wins_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuickWinRequest {
    departments: Vec<String>,
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, axum::Json(AssessmentCatalog::standard())).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<SubmitAssessment>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.submit(request) {
        Ok(record) => {
            let view = StoredAssessmentView::from(&record);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn overview_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.overview() {
        Ok(overview) => (StatusCode::OK, axum::Json(overview)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.export_csv() {
        Ok(body) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                csv_file_name(export_date())
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                body,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.results(&AssessmentId(assessment_id)) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn brief_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.brief(&AssessmentId(assessment_id)) {
        Ok(brief) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            brief,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn quick_wins_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<QuickWinRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.catalog().recommend_keys(&request.departments) {
        Ok(quick_wins) => (
            StatusCode::OK,
            axum::Json(json!({ "quick_wins": quick_wins })),
        )
            .into_response(),
        Err(error) => error_response(error.into()),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let (status, payload) = match &error {
        AssessmentServiceError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "error": error.to_string(),
                "fields": errors.fields(),
            }),
        ),
        AssessmentServiceError::Invalid(AssessmentError::InvalidInput(detail)) => (
            StatusCode::BAD_REQUEST,
            json!({ "error": detail }),
        ),
        AssessmentServiceError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            json!({ "error": "could not load assessment results, please retry" }),
        ),
        AssessmentServiceError::Repository(RepositoryError::Conflict) => (
            StatusCode::CONFLICT,
            json!({ "error": "assessment already exists" }),
        ),
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "error": error.to_string() }),
        ),
        AssessmentServiceError::Export(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": error.to_string() }),
        ),
    };
    (status, axum::Json(payload)).into_response()
}
