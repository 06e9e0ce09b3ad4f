use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000008_create_course_subject_table::CourseSubject;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassSession::Table)
                    .if_not_exists()
                    .col(pk_uuid(ClassSession::Id))
                    .col(uuid(ClassSession::CourseSubjectId))
                    .col(date(ClassSession::Date))
                    .col(time(ClassSession::StartTime))
                    .col(time(ClassSession::EndTime))
                    .col(string_null(ClassSession::Topic))
                    .col(text_null(ClassSession::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_session_course_subject_id")
                            .from(ClassSession::Table, ClassSession::CourseSubjectId)
                            .to(CourseSubject::Table, CourseSubject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassSession {
    #[sea_orm(iden = "class_sessions")]
    Table,
    Id,
    CourseSubjectId,
    Date,
    StartTime,
    EndTime,
    Topic,
    Notes,
}
