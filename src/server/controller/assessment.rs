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
        assessment::{
            CourseSubjectOptionDto, CreateEvaluationDto, EvaluationDto, GradeDto, GradeInputDto,
            StudentsWithGradesDto, SubjectGradeStatsDto,
        },
        attendance::{CourseOptionDto, RosterDto},
        home::TeacherSubjectDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{assessment::AssessmentService, attendance::AttendanceService},
        state::AppState,
    },
};

/// Tag for grouping evaluation and grade endpoints in OpenAPI documentation
pub static ASSESSMENT_TAG: &str = "assessments";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_courses))
        .routes(routes!(get_course_subjects))
        .routes(routes!(get_course_subject_options))
        .routes(routes!(get_evaluations))
        .routes(routes!(create_evaluation))
        .routes(routes!(record_grade))
        .routes(routes!(get_students))
        .routes(routes!(get_students_with_grades))
        .routes(routes!(get_subject_stats))
}

/// Get the courses the teacher teaches in or heads.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Courses by name
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/assessments/courses",
    tag = ASSESSMENT_TAG,
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

/// Get the subjects the teacher teaches in a course.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Subjects, falling back to qualified subjects assigned to the course
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/assessments/courses/{courseId}/subjects",
    tag = ASSESSMENT_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Subjects in the course", body = Vec<TeacherSubjectDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let subjects = AssessmentService::new(&state.db)
        .course_subjects(teacher.vinculo_id, course_id)
        .await?;

    Ok((StatusCode::OK, Json(subjects)))
}

/// Get the teacher's course subject ids in a course.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Course subjects ordered by subject name
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/assessments/courses/{courseId}/curso-materias",
    tag = ASSESSMENT_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course subjects", body = Vec<CourseSubjectOptionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_subject_options(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let options = AssessmentService::new(&state.db)
        .course_subject_options(teacher.vinculo_id, course_id)
        .await?;

    Ok((StatusCode::OK, Json(options)))
}

/// Get a subject's evaluations with grading progress.
///
/// # Access Control
/// - `SubjectAccess` - Teaches the subject in the course or heads the course
///
/// # Returns
/// - `200 OK` - Evaluations, newest first
/// - `403 Forbidden` - No access to the subject
/// - `404 Not Found` - Subject not taught in the course
#[utoipa::path(
    get,
    path = "/v1/api/teacher/assessments/courses/{courseId}/subjects/{subjectId}/evaluations",
    tag = ASSESSMENT_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("subjectId" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Evaluations", body = Vec<EvaluationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the subject", body = ErrorDto),
        (status = 404, description = "Subject not taught in the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_evaluations(
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

    let evaluations = AssessmentService::new(&state.db)
        .evaluations(course_id, subject_id)
        .await?;

    Ok((StatusCode::OK, Json(evaluations)))
}

/// Create an evaluation and notify the course's students.
///
/// # Access Control
/// - `CourseAccess` - Checked after the course subject is resolved
///
/// # Arguments
/// - `payload` - Name, date and optional type (default `prueba`)
///
/// # Returns
/// - `201 Created` - The new evaluation
/// - `400 Bad Request` - Missing name or date
/// - `403 Forbidden` - No access to the course
/// - `404 Not Found` - Subject not taught in the course
#[utoipa::path(
    post,
    path = "/v1/api/teacher/assessments/courses/{courseId}/subjects/{subjectId}/create-evaluation",
    tag = ASSESSMENT_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("subjectId" = Uuid, Path, description = "Subject ID")
    ),
    request_body = CreateEvaluationDto,
    responses(
        (status = 201, description = "Evaluation created", body = EvaluationDto),
        (status = 400, description = "Missing name or date", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the course", body = ErrorDto),
        (status = 404, description = "Subject not taught in the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_evaluation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, subject_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<CreateEvaluationDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let evaluation = AssessmentService::new(&state.db)
        .create_evaluation(teacher.vinculo_id, course_id, subject_id, payload, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(evaluation)))
}

/// Record or replace a student's grade for an evaluation.
///
/// # Access Control
/// - `CourseSubjectAccess` - Checked after the evaluation is resolved
///
/// # Arguments
/// - `payload` - Student, grade (`nota` or `calificacion`) and optional feedback
///
/// # Returns
/// - `201 Created` - The stored grade
/// - `400 Bad Request` - Missing student or grade, or grade outside 1.0 to 7.0
/// - `403 Forbidden` - No access to the evaluation's course subject
/// - `404 Not Found` - Unknown evaluation or student not enrolled
#[utoipa::path(
    post,
    path = "/v1/api/teacher/assessments/evaluations/{evaluationId}/grades",
    tag = ASSESSMENT_TAG,
    params(
        ("evaluationId" = Uuid, Path, description = "Evaluation ID")
    ),
    request_body = GradeInputDto,
    responses(
        (status = 201, description = "Grade stored", body = GradeDto),
        (status = 400, description = "Invalid grade payload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the course subject", body = ErrorDto),
        (status = 404, description = "Evaluation or enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_grade(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(evaluation_id): Path<Uuid>,
    Json(payload): Json<GradeInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let grade = AssessmentService::new(&state.db)
        .record_grade(teacher.vinculo_id, evaluation_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(grade)))
}

/// Get the students enrolled this year in a course.
///
/// # Access Control
/// - `SubjectAccess` - Teaches the subject in the course or heads the course
///
/// # Returns
/// - `200 OK` - Roster
/// - `403 Forbidden` - No access to the subject
#[utoipa::path(
    get,
    path = "/v1/api/teacher/assessments/courses/{courseId}/subjects/{subjectId}/students",
    tag = ASSESSMENT_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("subjectId" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Enrolled students", body = RosterDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the subject", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
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

    let roster = AssessmentService::new(&state.db)
        .students(course_id, Local::now().year())
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Get students with their latest grades, weighted average and standing.
///
/// # Access Control
/// - `SubjectAccess` - Teaches the subject in the course or heads the course
///
/// # Returns
/// - `200 OK` - Students with grades
/// - `403 Forbidden` - No access to the subject
/// - `404 Not Found` - Subject not taught in the course
#[utoipa::path(
    get,
    path = "/v1/api/teacher/assessments/courses/{courseId}/subjects/{subjectId}/students-with-grades",
    tag = ASSESSMENT_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("subjectId" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Students with grades", body = StudentsWithGradesDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "No access to the subject", body = ErrorDto),
        (status = 404, description = "Subject not taught in the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_with_grades(
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

    let students = AssessmentService::new(&state.db)
        .students_with_grades(course_id, subject_id)
        .await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Get grade statistics for a subject in a course.
///
/// # Access Control
/// - `SubjectAccess` - Teaches the subject in the course or heads the course
///
/// # Returns
/// - `200 OK` - Course average, extremes and approved count
/// - `403 Forbidden` - No access to the subject
/// - `404 Not Found` - Subject not taught in the course
#[utoipa::path(
    get,
    path = "/v1/api/teacher/assessments/subjects/{courseId}/{subjectId}/stats",
    tag = ASSESSMENT_TAG,
    params(
        ("courseId" = Uuid, Path, description = "Course ID"),
        ("subjectId" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Grade statistics", body = SubjectGradeStatsDto),
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

    let stats = AssessmentService::new(&state.db)
        .subject_stats(course_id, subject_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
