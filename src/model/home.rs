use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayScheduleItemDto {
    pub horario_id: Uuid,
    /// Day of week, 0 = Sunday.
    pub day: i32,
    pub start_time: String,
    pub end_time: String,
    pub course_id: Uuid,
    pub course_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub sala_id: Option<Uuid>,
    pub sala_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchoolRefDto {
    pub id: Uuid,
    pub nombre: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfileDto {
    pub persona_id: Option<String>,
    pub user_id: Option<String>,
    pub rol: Option<String>,
    pub colegio_id: Option<String>,
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub colegio: Option<SchoolRefDto>,
}

/// A subject the teacher teaches, optionally tied to a course.
///
/// `course_id` is null for subjects that only come from the teacher's qualifications.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSubjectDto {
    pub course_id: Option<Uuid>,
    pub course_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct GradeDistributionDto {
    pub excellent: u64,
    pub good: u64,
    pub regular: u64,
    pub insufficient: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStatsDto {
    pub subject_id: Uuid,
    pub course_id: Uuid,
    pub students_count: u64,
    pub attendance_average: Option<f64>,
    pub subject_average: Option<f64>,
    pub distribution: GradeDistributionDto,
    pub approved_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCourseStatsDto {
    pub course_name: String,
    #[serde(flatten)]
    pub stats: SubjectStatsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LastClassDto {
    pub class_id: Uuid,
    pub date: NaiveDate,
    pub course_id: Uuid,
    pub course_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub start_time: String,
    pub end_time: String,
    pub topic: Option<String>,
    pub observations: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherOverviewDto {
    pub vinculo_id: Uuid,
    pub subjects: Vec<TeacherSubjectDto>,
    pub last_class: Option<LastClassDto>,
}
