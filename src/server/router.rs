use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        assessment::{self, ASSESSMENT_TAG},
        attendance::{self, ATTENDANCE_TAG},
        communication::{self, COMMUNICATION_TAG},
        course::{self, COURSE_TAG},
        evaluation::{self, EVALUATION_TAG},
        filter::{self, FILTER_TAG},
        home::{self, HOME_TAG},
        notification::{self, NOTIFICATION_TAG},
        observation::{self, OBSERVATION_TAG},
        schedule::{self, SCHEDULE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Sage teacher API", description = "Teacher-facing school management endpoints"),
    tags(
        (name = HOME_TAG, description = "Teacher home: day schedule, profile and subject statistics"),
        (name = SCHEDULE_TAG, description = "Weekly timetable"),
        (name = COURSE_TAG, description = "Head-teacher course views"),
        (name = ATTENDANCE_TAG, description = "Daily attendance"),
        (name = ASSESSMENT_TAG, description = "Evaluations and grades"),
        (name = EVALUATION_TAG, description = "Evaluation course listing"),
        (name = OBSERVATION_TAG, description = "Student observations"),
        (name = NOTIFICATION_TAG, description = "Notification inbox"),
        (name = COMMUNICATION_TAG, description = "Teacher communications"),
        (name = FILTER_TAG, description = "Filter dropdown options")
    )
)]
struct ApiDoc;

/// Builds every API route plus Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(home::router())
        .merge(schedule::router())
        .merge(course::router())
        .merge(attendance::router())
        .merge(assessment::router())
        .merge(evaluation::router())
        .merge(observation::router())
        .merge(notification::router())
        .merge(communication::router())
        .merge(filter::router())
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
