use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ObservationKind {
    Positiva,
    Negativa,
    Informativa,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObservationItemDto {
    pub title: Option<String>,
    pub student_name: Option<String>,
    pub course: String,
    pub subject: Option<String>,
    pub description: String,
    pub tipo: ObservationKind,
    /// `DD/MM/YYYY`
    pub date: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ObservationListDto {
    pub total: u64,
    pub positivas: u64,
    pub negativas: u64,
    pub informativas: u64,
    pub items: Vec<ObservationItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateObservationDto {
    pub alumno_vinculo_id: Option<Uuid>,
    pub tipo: Option<String>,
    pub curso_materia_id: Option<Uuid>,
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObservationDto {
    pub observation_id: Uuid,
    pub alumno_vinculo_id: Uuid,
    pub profesor_vinculo_id: Uuid,
    pub course_id: Uuid,
    pub curso_materia_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: String,
    pub tipo: ObservationKind,
    /// `DD/MM/YYYY`
    pub date: String,
}
