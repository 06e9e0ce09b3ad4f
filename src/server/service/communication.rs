use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;
use uuid::Uuid;

use crate::{
    model::communication::{CommunicationSentDto, SendCommunicationDto, SentCommunicationListDto},
    server::{
        data::{
            enrollment::EnrollmentRepository, notification::NotificationRepository,
            vinculo::VinculoRepository,
        },
        error::AppError,
        model::notification::{sent_item_dto, CreateNotificationParams},
    },
};

/// Kind stored when a communication is sent without one.
const DEFAULT_COMMUNICATION_KIND: &str = "comunicacion";

pub struct CommunicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a communication to a course and/or individual vinculos.
    ///
    /// Recipients are the course's students for `year` plus every explicit id, without
    /// duplicates. The notification and its recipients are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(CommunicationSentDto)` - Notification id and recipient count
    /// - `Err(AppError::BadRequest)` - Missing asunto or no recipients
    /// - `Err(AppError::NotFound)` - Sender vinculo does not exist
    pub async fn send(
        &self,
        sender_id: Uuid,
        payload: SendCommunicationDto,
        year: i32,
        now: DateTime<Utc>,
    ) -> Result<CommunicationSentDto, AppError> {
        let title = payload
            .asunto
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("asunto is required".to_string()))?;

        let sender = VinculoRepository::new(self.db)
            .find_by_id(sender_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Vínculo institucional del emisor no encontrado".to_string())
            })?;

        let mut recipients = match payload.curso_id {
            Some(course_id) => {
                EnrollmentRepository::new(self.db)
                    .get_student_ids(course_id, year)
                    .await?
            }
            None => Vec::new(),
        };
        for id in [
            payload.estudiante_id,
            payload.profesor_id,
            payload.administrador_id,
        ]
        .into_iter()
        .flatten()
        {
            if !recipients.contains(&id) {
                recipients.push(id);
            }
        }

        if recipients.is_empty() {
            return Err(AppError::BadRequest(
                "Debe especificar al menos un destinatario".to_string(),
            ));
        }
        let recipient_count = recipients.len();

        let txn = self.db.begin().await?;
        let notification = NotificationRepository::new(&txn)
            .create(
                CreateNotificationParams {
                    school_id: sender.school_id,
                    sender_id,
                    course_id: payload.curso_id,
                    course_subject_id: None,
                    evaluation_id: None,
                    kind: payload
                        .tipo
                        .clone()
                        .unwrap_or_else(|| DEFAULT_COMMUNICATION_KIND.to_string()),
                    title,
                    description: payload.descripcion,
                    metadata: Some(json!({
                        "tipo": payload.tipo,
                        "cursoId": payload.curso_id,
                    })),
                    recipients,
                },
                now,
            )
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Vinculo {} sent communication {} to {} recipients",
            sender_id,
            notification.id,
            recipient_count
        );

        Ok(CommunicationSentDto {
            notification_id: notification.id,
            recipients: recipient_count,
        })
    }

    /// Gets communications sent by a vinculo newest first with read progress.
    ///
    /// Only a positive `limit` is applied.
    pub async fn sent(
        &self,
        sender_id: Uuid,
        limit: Option<i64>,
    ) -> Result<SentCommunicationListDto, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let limit = limit.filter(|l| *l > 0).map(|l| l as u64);
        let notifications = notification_repo.get_sent_by(sender_id, limit).await?;
        let counts = notification_repo
            .count_recipients(notifications.iter().map(|n| n.id).collect())
            .await?;

        let items: Vec<_> = notifications
            .into_iter()
            .map(|n| {
                let count = counts.get(&n.id).copied().unwrap_or_default();
                sent_item_dto(n, count)
            })
            .collect();

        Ok(SentCommunicationListDto {
            total: items.len(),
            items,
        })
    }
}
