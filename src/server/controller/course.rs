use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseAnalyticsDto, CourseSummaryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping head-teacher endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_summary))
        .routes(routes!(get_student_analytics))
}

/// Get enrollment and grade average for the course the teacher heads.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Course summary
/// - `204 No Content` - Teacher heads no course
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/course/summary",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Head course summary", body = CourseSummaryDto),
        (status = 204, description = "Teacher heads no course"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let summary = CourseService::new(&state.db).summary(teacher.vinculo_id).await?;

    Ok(match summary {
        Some(summary) => (StatusCode::OK, Json(summary)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// Get per-student grade, attendance and dropout risk for the head course.
///
/// # Access Control
/// - Authenticated teacher; empty when the teacher heads no course
///
/// # Returns
/// - `200 OK` - Students with risk scores and category counts
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/course/students/analytics",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Student analytics", body = CourseAnalyticsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let analytics = CourseService::new(&state.db)
        .student_analytics(teacher.vinculo_id)
        .await?;

    Ok((StatusCode::OK, Json(analytics)))
}
