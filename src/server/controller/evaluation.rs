use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{api::ErrorDto, attendance::CourseOptionDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::attendance::AttendanceService,
        state::AppState,
    },
};

/// Tag for grouping evaluation listing endpoints in OpenAPI documentation
pub static EVALUATION_TAG: &str = "evaluaciones";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_courses))
}

/// Get the courses the teacher teaches in or heads.
///
/// Lightweight list used by the evaluations screen.
#[utoipa::path(
    get,
    path = "/v1/api/teacher/evaluaciones/courses",
    tag = EVALUATION_TAG,
    responses(
        (status = 200, description = "Courses taught or headed", body = Vec<CourseOptionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let courses = AttendanceService::new(&state.db)
        .courses(teacher.vinculo_id)
        .await?;

    Ok((StatusCode::OK, Json(courses)))
}
