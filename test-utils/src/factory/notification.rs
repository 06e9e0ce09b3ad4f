//! Notification factory for messages and their recipients.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test notifications.
///
/// # Example
///
/// ```rust,ignore
/// let notification = NotificationFactory::new(&db, school.id, sender.id)
///     .kind("comunicacion")
///     .course(course.id)
///     .build()
///     .await?;
/// create_recipient(&db, notification.id, teacher.id, false).await?;
/// ```
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    school_id: Uuid,
    sender_vinculo_id: Uuid,
    course_id: Option<Uuid>,
    kind: String,
    title: String,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - kind: `"general"`
    /// - title: `"Notification {n}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, school_id: Uuid, sender_vinculo_id: Uuid) -> Self {
        Self {
            db,
            school_id,
            sender_vinculo_id,
            course_id: None,
            kind: "general".to_string(),
            title: format!("Notification {}", next_id()),
            created_at: Utc::now(),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn course(mut self, course_id: Uuid) -> Self {
        self.course_id = Some(course_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            school_id: ActiveValue::Set(self.school_id),
            sender_vinculo_id: ActiveValue::Set(self.sender_vinculo_id),
            course_id: ActiveValue::Set(self.course_id),
            course_subject_id: ActiveValue::Set(None),
            evaluation_id: ActiveValue::Set(None),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            metadata: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Addresses a notification to a recipient.
pub async fn create_recipient(
    db: &DatabaseConnection,
    notification_id: Uuid,
    recipient_vinculo_id: Uuid,
    read: bool,
) -> Result<entity::notification_recipient::Model, DbErr> {
    entity::notification_recipient::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        notification_id: ActiveValue::Set(notification_id),
        recipient_vinculo_id: ActiveValue::Set(recipient_vinculo_id),
        read: ActiveValue::Set(read),
        read_at: ActiveValue::Set(read.then(Utc::now)),
    }
    .insert(db)
    .await
}
