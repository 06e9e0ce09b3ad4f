use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Local};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        filter::{
            AdminFilterListDto, CourseFilterListDto, CourseSubjectFilterListDto,
            StudentFilterListDto, SubjectFilterListDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::filter::FilterService,
        state::AppState,
    },
};

/// Tag for grouping filter option endpoints in OpenAPI documentation
pub static FILTER_TAG: &str = "filters";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_course_subjects))
        .routes(routes!(get_courses))
        .routes(routes!(get_subjects))
        .routes(routes!(get_students))
        .routes(routes!(get_admins))
}

/// Get course/subject pairs for filter dropdowns.
///
/// # Returns
/// - `200 OK` - Pairs ordered by year desc, course name and subject name
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/filters/course-subjects",
    tag = FILTER_TAG,
    responses(
        (status = 200, description = "Course/subject pairs", body = CourseSubjectFilterListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let items = FilterService::new(&state.db)
        .course_subjects(teacher.vinculo_id)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Get courses taught or headed for filter dropdowns.
#[utoipa::path(
    get,
    path = "/v1/api/teacher/filters/courses",
    tag = FILTER_TAG,
    responses(
        (status = 200, description = "Courses", body = CourseFilterListDto),
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

    let items = FilterService::new(&state.db)
        .courses(teacher.vinculo_id)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Get the subjects the teacher teaches in a course for filter dropdowns.
#[utoipa::path(
    get,
    path = "/v1/api/teacher/filters/subjects/{courseId}",
    tag = FILTER_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Subjects", body = SubjectFilterListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let items = FilterService::new(&state.db)
        .subjects(teacher.vinculo_id, course_id)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Get this year's students of a course for filter dropdowns.
///
/// # Access Control
/// - `CourseAccess` - Teaches in or heads the course
///
/// # Returns
/// - `200 OK` - Students
/// - `403 Forbidden` - No access to the course
#[utoipa::path(
    get,
    path = "/v1/api/teacher/filters/students/{courseId}",
    tag = FILTER_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Students", body = StudentFilterListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .require(&[Permission::CourseAccess(course_id)])
        .await?;

    let items = FilterService::new(&state.db)
        .students(course_id, Local::now().year())
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Get the administrators of the teacher's school.
///
/// # Returns
/// - `200 OK` - Administrators ordered by surname then name
/// - `404 Not Found` - Caller's vinculo not found
#[utoipa::path(
    get,
    path = "/v1/api/teacher/filters/admins",
    tag = FILTER_TAG,
    responses(
        (status = 200, description = "School administrators", body = AdminFilterListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vinculo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admins(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let items = FilterService::new(&state.db)
        .admins(teacher.vinculo_id)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}
