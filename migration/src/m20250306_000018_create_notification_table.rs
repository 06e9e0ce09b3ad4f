use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_school_table::School,
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
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_uuid(Notification::Id))
                    .col(uuid(Notification::SchoolId))
                    .col(uuid(Notification::SenderVinculoId))
                    .col(uuid_null(Notification::CourseId))
                    .col(uuid_null(Notification::CourseSubjectId))
                    .col(uuid_null(Notification::EvaluationId))
                    .col(string(Notification::Kind).default("general"))
                    .col(string(Notification::Title))
                    .col(text_null(Notification::Description))
                    .col(json_null(Notification::Metadata))
                    .col(
                        timestamp_with_time_zone(Notification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Notification::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_school_id")
                            .from(Notification::Table, Notification::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_sender_vinculo_id")
                            .from(Notification::Table, Notification::SenderVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    SchoolId,
    SenderVinculoId,
    CourseId,
    CourseSubjectId,
    EvaluationId,
    Kind,
    Title,
    Description,
    Metadata,
    CreatedAt,
    UpdatedAt,
}
