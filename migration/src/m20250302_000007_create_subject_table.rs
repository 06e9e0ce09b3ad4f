use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_school_table::School;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_uuid(Subject::Id))
                    .col(uuid(Subject::SchoolId))
                    .col(string(Subject::Name))
                    .col(text_null(Subject::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_school_id")
                            .from(Subject::Table, Subject::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subject {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    SchoolId,
    Name,
    Description,
}
