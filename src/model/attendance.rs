use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseOptionDto {
    pub course_id: Uuid,
    pub course_name: String,
}

/// Enrolled student as listed by attendance and grading screens.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RosterStudentDto {
    #[serde(rename = "alumnoVinculoId")]
    pub alumno_vinculo_id: Uuid,
    pub rut: Option<String>,
    pub nombre_completo: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RosterDto {
    pub count: usize,
    pub students: Vec<RosterStudentDto>,
}

/// Attendance mark as reported for a day; `no_registrado` when nothing was taken.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceMarkDto {
    Presente,
    Ausente,
    Tardanza,
    NoRegistrado,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DayAttendanceStudentDto {
    #[serde(rename = "alumnoVinculoId")]
    pub alumno_vinculo_id: Uuid,
    pub rut: Option<String>,
    pub nombre_completo: Option<String>,
    pub estado: AttendanceMarkDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayAttendanceDto {
    pub course_id: Uuid,
    pub fecha: NaiveDate,
    pub count: usize,
    pub students: Vec<DayAttendanceStudentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntryDto {
    pub alumno_vinculo_id: Uuid,
    /// `presente`, `ausente` or `tardanza`.
    pub estado: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateAttendanceDto {
    #[serde(default)]
    pub updates: Vec<AttendanceEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TakeAttendanceDto {
    pub curso_materia_id: Option<Uuid>,
    pub fecha: Option<String>,
    #[serde(default)]
    pub attendances: Vec<AttendanceEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResultDto {
    pub course_id: Uuid,
    pub fecha: NaiveDate,
    pub processed: usize,
}
