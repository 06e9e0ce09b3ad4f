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
                    .table(Evaluation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Evaluation::Id))
                    .col(uuid(Evaluation::CourseSubjectId))
                    .col(string(Evaluation::Name))
                    .col(date(Evaluation::Date))
                    .col(string(Evaluation::Kind).default("prueba"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evaluation_course_subject_id")
                            .from(Evaluation::Table, Evaluation::CourseSubjectId)
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
            .drop_table(Table::drop().table(Evaluation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Evaluation {
    #[sea_orm(iden = "evaluations")]
    Table,
    Id,
    CourseSubjectId,
    Name,
    Date,
    Kind,
}
