use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::catalog::Archetype;
use super::service::{DiagnosisRequest, DiagnosisService};
use super::submission::SubmissionSink;
use crate::error::AppError;

/// Router builder exposing the quiz catalog and diagnosis endpoints.
pub fn diagnosis_router<S>(service: Arc<DiagnosisService<S>>) -> Router
where
    S: SubmissionSink + 'static,
{
    Router::new()
        .route("/api/v1/diagnosis", post(diagnose_handler::<S>))
        .route("/api/v1/questions", get(questions_handler::<S>))
        .route("/api/v1/archetypes", get(archetypes_handler::<S>))
        .route(
            "/api/v1/archetypes/:archetype_id",
            get(archetype_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn diagnose_handler<S>(
    State(service): State<Arc<DiagnosisService<S>>>,
    axum::Json(request): axum::Json<DiagnosisRequest>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    let outcome = service.diagnose(request);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<DiagnosisService<S>>>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    (StatusCode::OK, axum::Json(service.questions())).into_response()
}

pub(crate) async fn archetypes_handler<S>(
    State(service): State<Arc<DiagnosisService<S>>>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    (StatusCode::OK, axum::Json(service.archetypes())).into_response()
}

pub(crate) async fn archetype_handler<S>(
    State(service): State<Arc<DiagnosisService<S>>>,
    Path(archetype_id): Path<String>,
) -> Result<Json<Archetype>, AppError>
where
    S: SubmissionSink + 'static,
{
    let archetype = service.archetype(&archetype_id)?;
    Ok(Json(archetype))
}
