use crate::server::{
    data::notification::NotificationRepository, model::notification::CreateNotificationParams,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, notification::NotificationFactory},
};
use uuid::Uuid;

mod count_recipients;
mod create;
mod get_inbox;
mod set_read;

/// Creates a school with a sender and a recipient teacher.
async fn sender_and_recipient(
    db: &DatabaseConnection,
) -> Result<(entity::school::Model, entity::vinculo::Model, entity::vinculo::Model), DbErr> {
    let school = factory::create_school(db).await?;
    let sender = factory::helpers::create_teacher(db, school.id).await?;
    let recipient = factory::helpers::create_teacher(db, school.id).await?;

    Ok((school, sender, recipient))
}

fn params(school_id: Uuid, sender_id: Uuid, recipients: Vec<Uuid>) -> CreateNotificationParams {
    CreateNotificationParams {
        school_id,
        sender_id,
        course_id: None,
        course_subject_id: None,
        evaluation_id: None,
        kind: "comunicacion".to_string(),
        title: "Reunión de apoderados".to_string(),
        description: Some("Jueves 18:00".to_string()),
        metadata: None,
        recipients,
    }
}
