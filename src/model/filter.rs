use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::home::TeacherSubjectDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSubjectFilterDto {
    pub course_id: Uuid,
    pub course_name: String,
    pub year: i32,
    pub subject_id: Uuid,
    pub subject_name: String,
    /// `"{course} - {subject}"`
    pub label: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseFilterDto {
    pub course_id: Uuid,
    pub course_name: String,
    pub year: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentFilterDto {
    pub alumno_vinculo_id: Uuid,
    pub rut: Option<String>,
    pub nombre_completo: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminFilterDto {
    pub vinculo_id: Uuid,
    pub colegio_id: Uuid,
    pub rut: Option<String>,
    pub nombre_completo: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CourseSubjectFilterListDto {
    pub count: usize,
    pub items: Vec<CourseSubjectFilterDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CourseFilterListDto {
    pub count: usize,
    pub items: Vec<CourseFilterDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubjectFilterListDto {
    pub count: usize,
    pub items: Vec<TeacherSubjectDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentFilterListDto {
    pub count: usize,
    pub items: Vec<StudentFilterDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AdminFilterListDto {
    pub count: usize,
    pub items: Vec<AdminFilterDto>,
}
