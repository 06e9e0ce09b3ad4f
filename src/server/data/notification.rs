use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::server::model::notification::{CreateNotificationParams, RecipientCounts};

/// Notification queries; runs on the pool or inside a transaction.
pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a notification and one unread recipient row per distinct recipient.
    ///
    /// Callers wanting the pair written atomically pass a transaction.
    pub async fn create(
        &self,
        params: CreateNotificationParams,
        now: DateTime<Utc>,
    ) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            school_id: ActiveValue::Set(params.school_id),
            sender_vinculo_id: ActiveValue::Set(params.sender_id),
            course_id: ActiveValue::Set(params.course_id),
            course_subject_id: ActiveValue::Set(params.course_subject_id),
            evaluation_id: ActiveValue::Set(params.evaluation_id),
            kind: ActiveValue::Set(params.kind),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            metadata: ActiveValue::Set(params.metadata),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        let mut seen = HashSet::new();
        for recipient_id in params.recipients {
            if !seen.insert(recipient_id) {
                continue;
            }

            entity::notification_recipient::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                notification_id: ActiveValue::Set(notification.id),
                recipient_vinculo_id: ActiveValue::Set(recipient_id),
                read: ActiveValue::Set(false),
                read_at: ActiveValue::Set(None),
            }
            .insert(self.db)
            .await?;
        }

        Ok(notification)
    }

    /// Gets the newest notifications addressed to a vinculo.
    ///
    /// # Arguments
    /// - `recipient_id` - Vinculo receiving the notifications
    /// - `unread_only` - Skip notifications already read
    /// - `limit` - Maximum number of items returned
    pub async fn get_inbox(
        &self,
        recipient_id: Uuid,
        unread_only: bool,
        limit: u64,
    ) -> Result<Vec<(entity::notification_recipient::Model, entity::notification::Model)>, DbErr>
    {
        let mut query = entity::prelude::NotificationRecipient::find()
            .filter(entity::notification_recipient::Column::RecipientVinculoId.eq(recipient_id));
        if unread_only {
            query = query.filter(entity::notification_recipient::Column::Read.eq(false));
        }

        let rows = query
            .find_also_related(entity::prelude::Notification)
            .order_by_desc(entity::notification::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(recipient, notification)| notification.map(|n| (recipient, n)))
            .collect())
    }

    pub async fn count_unread(&self, recipient_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::NotificationRecipient::find()
            .filter(entity::notification_recipient::Column::RecipientVinculoId.eq(recipient_id))
            .filter(entity::notification_recipient::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Finds the recipient row tying a notification to a vinculo.
    pub async fn find_recipient(
        &self,
        notification_id: Uuid,
        recipient_id: Uuid,
    ) -> Result<Option<entity::notification_recipient::Model>, DbErr> {
        entity::prelude::NotificationRecipient::find()
            .filter(entity::notification_recipient::Column::NotificationId.eq(notification_id))
            .filter(entity::notification_recipient::Column::RecipientVinculoId.eq(recipient_id))
            .one(self.db)
            .await
    }

    /// Marks a recipient row read or unread; `read_at` is cleared when unread.
    pub async fn set_read(
        &self,
        recipient: entity::notification_recipient::Model,
        read: bool,
        now: DateTime<Utc>,
    ) -> Result<entity::notification_recipient::Model, DbErr> {
        let mut active_model: entity::notification_recipient::ActiveModel = recipient.into();
        active_model.read = ActiveValue::Set(read);
        active_model.read_at = ActiveValue::Set(read.then_some(now));

        active_model.update(self.db).await
    }

    /// Gets notifications sent by a vinculo, newest first.
    pub async fn get_sent_by(
        &self,
        sender_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::SenderVinculoId.eq(sender_id))
            .order_by_desc(entity::notification::Column::CreatedAt);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        query.all(self.db).await
    }

    /// Counts total and read recipients per notification.
    pub async fn count_recipients(
        &self,
        notification_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, RecipientCounts>, DbErr> {
        if notification_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::NotificationRecipient::find()
            .filter(entity::notification_recipient::Column::NotificationId.is_in(notification_ids))
            .all(self.db)
            .await?;

        let mut counts: HashMap<Uuid, RecipientCounts> = HashMap::new();
        for row in rows {
            let entry = counts.entry(row.notification_id).or_default();
            entry.total += 1;
            if row.read {
                entry.read += 1;
            }
        }

        Ok(counts)
    }
}
