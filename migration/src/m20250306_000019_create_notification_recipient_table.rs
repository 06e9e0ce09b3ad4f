use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250306_000018_create_notification_table::Notification,
    m20250301_000005_create_vinculo_table::Vinculo,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationRecipient::Table)
                    .if_not_exists()
                    .col(pk_uuid(NotificationRecipient::Id))
                    .col(uuid(NotificationRecipient::NotificationId))
                    .col(uuid(NotificationRecipient::RecipientVinculoId))
                    .col(boolean(NotificationRecipient::Read).default(false))
                    .col(timestamp_with_time_zone_null(NotificationRecipient::ReadAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_recipient_notification_id")
                            .from(NotificationRecipient::Table, NotificationRecipient::NotificationId)
                            .to(Notification::Table, Notification::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_recipient_recipient_vinculo_id")
                            .from(NotificationRecipient::Table, NotificationRecipient::RecipientVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_notification_recipient_unique")
                            .col(NotificationRecipient::NotificationId)
                            .col(NotificationRecipient::RecipientVinculoId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationRecipient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationRecipient {
    #[sea_orm(iden = "notification_recipients")]
    Table,
    Id,
    NotificationId,
    RecipientVinculoId,
    Read,
    ReadAt,
}
