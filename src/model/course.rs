use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummaryDto {
    pub course_id: Uuid,
    pub students_count: u64,
    pub course_average: Option<f64>,
}

/// Dropout risk bucket derived from grades and attendance.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Bajo,
    Medio,
    Alto,
    Critico,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentAnalyticsDto {
    pub alumno_vinculo_id: Uuid,
    pub rut: Option<String>,
    pub nombre_completo: Option<String>,
    pub promedio: Option<f64>,
    pub asistencia_percent: i64,
    pub riesgo_percent: i64,
    pub riesgo_categoria: RiskCategory,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseAnalyticsDto {
    pub course_id: Option<Uuid>,
    pub students: Vec<StudentAnalyticsDto>,
    pub medium_risk_count: u64,
    pub critical_risk_count: u64,
}
