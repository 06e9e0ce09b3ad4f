use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        home::{
            DayScheduleItemDto, SubjectCourseStatsDto, SubjectStatsDto, TeacherOverviewDto,
            TeacherProfileDto, TeacherSubjectDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::home::HomeService,
        state::AppState,
        util::date::parse_date,
    },
};

/// Tag for grouping teacher home endpoints in OpenAPI documentation
pub static HOME_TAG: &str = "main";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_day_schedule))
        .routes(routes!(get_profile))
        .routes(routes!(get_subjects))
        .routes(routes!(get_subject_stats))
        .routes(routes!(get_overview))
        .routes(routes!(get_subject_stats_by_course))
}

#[derive(Deserialize)]
pub struct DayScheduleQuery {
    pub date: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewQuery {
    pub course_id: Option<Uuid>,
}

/// Get the teacher's classes for a single day.
///
/// Returns the active weekly slots whose weekday matches the requested date and
/// whose validity window contains it, earliest first.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the token
/// - `query` - Optional `date` in `YYYY-MM-DD`, defaults to today
///
/// # Returns
/// - `200 OK` - Slots for the day
/// - `400 Bad Request` - Malformed date
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/main/day-schedule",
    tag = HOME_TAG,
    params(
        ("date" = Option<String>, Query, description = "Day to list, YYYY-MM-DD (default: today)")
    ),
    responses(
        (status = 200, description = "Slots for the day", body = Vec<DayScheduleItemDto>),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_day_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DayScheduleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let date = match query.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };

    let slots = HomeService::new(&state.db)
        .day_schedule(teacher.vinculo_id, date)
        .await?;

    Ok((StatusCode::OK, Json(slots)))
}

/// Get the caller's profile.
///
/// Built from the token claims, the caller's person record and school.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Profile
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/main/profile",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Teacher profile", body = TeacherProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let profile = HomeService::new(&state.db).profile(&teacher.claims).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Get the course/subject pairs the teacher teaches.
///
/// Falls back to the teacher's qualified subjects, without a course, when no
/// class is assigned.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Subjects with their course
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/main/subjects",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Subjects taught", body = Vec<TeacherSubjectDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let subjects = HomeService::new(&state.db).subjects(teacher.vinculo_id).await?;

    Ok((StatusCode::OK, Json(subjects)))
}

/// Get attendance and grade statistics for one subject in one course.
///
/// # Access Control
/// - `SubjectAccess` - Teaches the subject in the course or heads the course
///
/// # Arguments
/// - `course_id` - Course the subject is taught in
/// - `subject_id` - Subject to summarise
///
/// # Returns
/// - `200 OK` - Enrollment, attendance average, grade average and distribution
/// - `403 Forbidden` - No access to the subject
/// - `404 Not Found` - Subject not taught in the course
#[utoipa::path(
    get,
    path = "/v1/api/teacher/main/stats/{courseId}/{subjectId}",
    tag = HOME_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("subjectId" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject statistics", body = SubjectStatsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the subject", body = ErrorDto),
        (status = 404, description = "Subject not taught in the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subject_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, subject_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .require(&[Permission::SubjectAccess {
            course_id,
            subject_id,
        }])
        .await?;

    let stats = HomeService::new(&state.db)
        .subject_stats(course_id, subject_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Get the teacher's subjects and most recent class.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Arguments
/// - `query` - Optional `courseId` restricting the subjects
///
/// # Returns
/// - `200 OK` - Overview
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/main/overview",
    tag = HOME_TAG,
    params(
        ("courseId" = Option<Uuid>, Query, description = "Restrict to one course")
    ),
    responses(
        (status = 200, description = "Teacher overview", body = TeacherOverviewDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<OverviewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let overview = HomeService::new(&state.db)
        .overview(teacher.vinculo_id, query.course_id)
        .await?;

    Ok((StatusCode::OK, Json(overview)))
}

/// Get subject statistics for every course where the teacher teaches the subject.
///
/// # Access Control
/// - Authenticated teacher; only courses the teacher teaches the subject in are included
///
/// # Returns
/// - `200 OK` - One entry per course
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/main/subjects/{subjectId}/stats",
    tag = HOME_TAG,
    params(
        ("subjectId" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Statistics per course", body = Vec<SubjectCourseStatsDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subject_stats_by_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(subject_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let stats = HomeService::new(&state.db)
        .subject_stats_by_course(teacher.vinculo_id, subject_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
