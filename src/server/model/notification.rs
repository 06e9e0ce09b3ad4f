//! Notification parameters and read models.

use serde_json::Value;
use uuid::Uuid;

use crate::model::{communication::SentCommunicationDto, notification::NotificationItemDto};

/// Parameters for creating a notification with its recipients.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub school_id: Uuid,
    pub sender_id: Uuid,
    pub course_id: Option<Uuid>,
    pub course_subject_id: Option<Uuid>,
    pub evaluation_id: Option<Uuid>,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub metadata: Option<Value>,
    /// Duplicates are collapsed on insert.
    pub recipients: Vec<Uuid>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipientCounts {
    pub total: u64,
    pub read: u64,
}

/// Builds an inbox item from a recipient row and its notification.
///
/// `subjectId` carries the notification's course subject.
pub fn inbox_item_dto(
    recipient: entity::notification_recipient::Model,
    notification: entity::notification::Model,
) -> NotificationItemDto {
    NotificationItemDto {
        id: notification.id,
        title: notification.title,
        description: notification.description,
        kind: notification.kind,
        metadata: notification.metadata,
        course_id: notification.course_id,
        subject_id: notification.course_subject_id,
        evaluation_id: notification.evaluation_id,
        sender_id: notification.sender_vinculo_id,
        read: recipient.read,
        read_at: recipient.read_at,
        created_at: notification.created_at,
    }
}

pub fn sent_item_dto(
    notification: entity::notification::Model,
    counts: RecipientCounts,
) -> SentCommunicationDto {
    SentCommunicationDto {
        id: notification.id,
        title: notification.title,
        description: notification.description,
        kind: notification.kind,
        metadata: notification.metadata,
        course_id: notification.course_id,
        created_at: notification.created_at,
        recipients: counts.total,
        read_recipients: counts.read,
    }
}
