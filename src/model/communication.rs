use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Message from a teacher to a course, a student, a colleague or an administrator.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendCommunicationDto {
    pub curso_id: Option<Uuid>,
    pub estudiante_id: Option<Uuid>,
    pub profesor_id: Option<Uuid>,
    pub administrador_id: Option<Uuid>,
    pub asunto: Option<String>,
    pub tipo: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationSentDto {
    pub notification_id: Uuid,
    pub recipients: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SentCommunicationDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub course_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub recipients: u64,
    pub read_recipients: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SentCommunicationListDto {
    pub total: usize,
    pub items: Vec<SentCommunicationDto>,
}
