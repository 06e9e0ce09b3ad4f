use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        observation::{CreateObservationDto, ObservationDto, ObservationKind, ObservationListDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::observation::ObservationService,
        state::AppState,
    },
};

/// Tag for grouping observation endpoints in OpenAPI documentation
pub static OBSERVATION_TAG: &str = "observations";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_observations, create_observation))
}

#[derive(Deserialize)]
pub struct ObservationQuery {
    pub tipo: Option<String>,
}

/// Get the observations the teacher wrote in a course.
///
/// Totals per kind cover every observation; `tipo` only filters the items.
///
/// # Access Control
/// - Authenticated teacher; only the caller's own observations are listed
///
/// # Arguments
/// - `course_id` - Course to list
/// - `query` - Optional `tipo` filter
///
/// # Returns
/// - `200 OK` - Observations newest first with totals
/// - `400 Bad Request` - Unknown `tipo`
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/observations/courses/{courseId}",
    tag = OBSERVATION_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("tipo" = Option<String>, Query, description = "positiva, negativa or informativa")
    ),
    responses(
        (status = 200, description = "Observations with totals", body = ObservationListDto),
        (status = 400, description = "Unknown observation kind", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_observations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
    Query(query): Query<ObservationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let kind = query
        .tipo
        .as_deref()
        .map(ObservationKind::parse)
        .transpose()?;

    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let observations = ObservationService::new(&state.db)
        .list(teacher.vinculo_id, course_id, kind)
        .await?;

    Ok((StatusCode::OK, Json(observations)))
}

/// Record an observation about a student.
///
/// # Access Control
/// - `CourseAccess` - Checked on the course the observation lands in
///
/// # Arguments
/// - `course_id` - Course, replaced by the course subject's course when one is given
/// - `payload` - Student, kind, description and optional title and course subject
///
/// # Returns
/// - `201 Created` - The new observation
/// - `400 Bad Request` - Missing fields, unknown kind or course subject from another course
/// - `403 Forbidden` - No access to the course
/// - `404 Not Found` - Student not enrolled
#[utoipa::path(
    post,
    path = "/v1/api/teacher/observations/courses/{courseId}",
    tag = OBSERVATION_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID")
    ),
    request_body = CreateObservationDto,
    responses(
        (status = 201, description = "Observation recorded", body = ObservationDto),
        (status = 400, description = "Invalid observation payload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the course", body = ErrorDto),
        (status = 404, description = "Student not enrolled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_observation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<CreateObservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let observation = ObservationService::new(&state.db)
        .create(teacher.vinculo_id, course_id, payload, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(observation)))
}
