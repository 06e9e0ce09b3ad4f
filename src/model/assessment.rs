use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSubjectOptionDto {
    pub curso_materia_id: Uuid,
    pub subject_id: Uuid,
    pub subject_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    pub evaluation_id: Uuid,
    pub name: String,
    pub tipo: String,
    pub date: NaiveDate,
    pub graded_count: u64,
    pub total_students: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEvaluationDto {
    pub name: Option<String>,
    pub tipo: Option<String>,
    /// `YYYY-MM-DD`
    pub fecha: Option<String>,
}

/// Grade submission; `nota` and `calificacion` are accepted interchangeably.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradeInputDto {
    pub alumno_vinculo_id: Option<Uuid>,
    pub nota: Option<f64>,
    pub calificacion: Option<f64>,
    pub retroalimentacion: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradeDto {
    pub note_id: Uuid,
    pub evaluation_id: Uuid,
    pub alumno_vinculo_id: Uuid,
    pub nota: f64,
    pub retroalimentacion: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GradeStanding {
    Excelente,
    Bueno,
    Regular,
    Insuficiente,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentGradeDto {
    pub evaluation_id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub nota: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentGradesDto {
    pub alumno_vinculo_id: Uuid,
    pub nombre_completo: Option<String>,
    pub rut: Option<String>,
    pub recent_evaluations: Vec<RecentGradeDto>,
    /// `"{n}+"` when more evaluations exist than are shown.
    pub more: Option<String>,
    pub promedio: Option<f64>,
    pub estado: GradeStanding,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentsWithGradesDto {
    pub course_id: Uuid,
    pub subject_id: Uuid,
    pub total_evaluations: u64,
    pub count: usize,
    pub students: Vec<StudentGradesDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectGradeStatsDto {
    pub course_id: Uuid,
    pub subject_id: Uuid,
    pub course_average: Option<f64>,
    pub highest_student_average: Option<f64>,
    pub lowest_student_average: Option<f64>,
    pub approved_count: u64,
    pub total_evaluations: u64,
}
