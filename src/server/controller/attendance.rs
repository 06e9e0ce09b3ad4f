use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Local, Utc};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        attendance::{
            AttendanceResultDto, CourseOptionDto, DayAttendanceDto, RosterDto, TakeAttendanceDto,
            UpdateAttendanceDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::attendance::AttendanceService,
        state::AppState,
        util::date::parse_date,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_courses))
        .routes(routes!(get_students))
        .routes(routes!(get_day, update_day))
        .routes(routes!(take))
}

/// Get the courses the teacher can take attendance for.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Courses taught or headed, by name
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/attendance/courses",
    tag = ATTENDANCE_TAG,
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

/// Get the students enrolled in a course this year.
///
/// A teacher without access to the course receives an empty roster rather than
/// an error.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Arguments
/// - `course_id` - Course to list
///
/// # Returns
/// - `200 OK` - Roster, empty without course access
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/attendance/courses/{courseId}/students",
    tag = ATTENDANCE_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrolled students", body = RosterDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let roster = AttendanceService::new(&state.db)
        .students(teacher.vinculo_id, course_id, Local::now().year())
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Get every enrolled student's mark for a date.
///
/// # Access Control
/// - `CourseAccess` - Teaches in or heads the course
///
/// # Arguments
/// - `course_id` - Course to read
/// - `fecha` - Date in `YYYY-MM-DD`
///
/// # Returns
/// - `200 OK` - Marks, `no_registrado` where none was taken
/// - `400 Bad Request` - Malformed date
/// - `403 Forbidden` - No access to the course
#[utoipa::path(
    get,
    path = "/v1/api/teacher/attendance/courses/{courseId}/{fecha}",
    tag = ATTENDANCE_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("fecha" = String, Path, description = "Date, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Marks for the date", body = DayAttendanceDto),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_day(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, fecha)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&fecha)?;

    let _ = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .require(&[Permission::CourseAccess(course_id)])
        .await?;

    let day = AttendanceService::new(&state.db).day(course_id, date).await?;

    Ok((StatusCode::OK, Json(day)))
}

/// Overwrite marks for a date.
///
/// Every student is checked against the enrollment before anything is
/// written; the upserts then run in one transaction.
///
/// # Access Control
/// - `CourseAccess` - Teaches in or heads the course
///
/// # Arguments
/// - `course_id` - Course to update
/// - `fecha` - Date in `YYYY-MM-DD`
/// - `payload` - Non-empty list of marks
///
/// # Returns
/// - `200 OK` - Number of marks processed
/// - `400 Bad Request` - Malformed date, empty list or unknown status
/// - `403 Forbidden` - No access to the course
/// - `404 Not Found` - Student not enrolled for the date's year
#[utoipa::path(
    patch,
    path = "/v1/api/teacher/attendance/courses/{courseId}/{fecha}",
    tag = ATTENDANCE_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("fecha" = String, Path, description = "Date, YYYY-MM-DD")
    ),
    request_body = UpdateAttendanceDto,
    responses(
        (status = 200, description = "Marks written", body = AttendanceResultDto),
        (status = 400, description = "Invalid date or marks", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the course", body = ErrorDto),
        (status = 404, description = "Student not enrolled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_day(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, fecha)): Path<(Uuid, String)>,
    Json(payload): Json<UpdateAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&fecha)?;

    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .require(&[Permission::CourseAccess(course_id)])
        .await?;

    let result = AttendanceService::new(&state.db)
        .update(teacher.vinculo_id, course_id, date, payload.updates, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Take attendance for a course and notify absent students.
///
/// # Access Control
/// - `CourseAccess` - Teaches in or heads the course
///
/// # Arguments
/// - `course_id` - Course attendance is taken for
/// - `payload` - Date, marks and an optional course subject
///
/// # Returns
/// - `201 Created` - Number of marks processed
/// - `400 Bad Request` - Missing date or marks, or a course subject from another course
/// - `403 Forbidden` - No access to the course
/// - `404 Not Found` - Unknown course subject or a student not enrolled
#[utoipa::path(
    post,
    path = "/v1/api/teacher/attendance/take/{courseId}",
    tag = ATTENDANCE_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID")
    ),
    request_body = TakeAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceResultDto),
        (status = 400, description = "Invalid attendance payload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the course", body = ErrorDto),
        (status = 404, description = "Course subject or enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn take(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<TakeAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .require(&[Permission::CourseAccess(course_id)])
        .await?;

    let result = AttendanceService::new(&state.db)
        .take(teacher.vinculo_id, course_id, payload, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(result)))
}
