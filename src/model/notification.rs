use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItemDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub course_id: Option<Uuid>,
    pub subject_id: Option<Uuid>,
    pub evaluation_id: Option<Uuid>,
    pub sender_id: Uuid,
    pub read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationInboxDto {
    pub unread_count: u64,
    pub items: Vec<NotificationItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct MarkReadDto {
    pub read: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReadDto {
    pub id: Uuid,
    pub read: bool,
    pub read_at: Option<DateTime<Utc>>,
}
