use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::notification::{NotificationInboxDto, NotificationReadDto},
    server::{
        data::notification::NotificationRepository, error::AppError,
        model::notification::inbox_item_dto,
    },
};

/// Items returned by the inbox.
const INBOX_SIZE: u64 = 5;

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the unread count and the newest notifications addressed to a vinculo
    pub async fn inbox(
        &self,
        recipient_id: Uuid,
        unread_only: bool,
    ) -> Result<NotificationInboxDto, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let unread_count = notification_repo.count_unread(recipient_id).await?;
        let items = notification_repo
            .get_inbox(recipient_id, unread_only, INBOX_SIZE)
            .await?
            .into_iter()
            .map(|(recipient, notification)| inbox_item_dto(recipient, notification))
            .collect();

        Ok(NotificationInboxDto {
            unread_count,
            items,
        })
    }

    /// Marks a notification read or unread for its recipient.
    ///
    /// # Returns
    /// - `Ok(NotificationReadDto)` - Updated read state
    /// - `Err(AppError::NotFound)` - Notification not addressed to the vinculo
    pub async fn mark_read(
        &self,
        recipient_id: Uuid,
        notification_id: Uuid,
        read: bool,
        now: DateTime<Utc>,
    ) -> Result<NotificationReadDto, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let recipient = notification_repo
            .find_recipient(notification_id, recipient_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notificación no encontrada".to_string()))?;
        let recipient = notification_repo.set_read(recipient, read, now).await?;

        Ok(NotificationReadDto {
            id: recipient.notification_id,
            read: recipient.read,
            read_at: recipient.read_at,
        })
    }
}
