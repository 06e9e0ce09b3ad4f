use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000006_create_course_table::Course,
    m20250302_000007_create_subject_table::Subject,
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
                    .table(CourseSubject::Table)
                    .if_not_exists()
                    .col(pk_uuid(CourseSubject::Id))
                    .col(uuid(CourseSubject::CourseId))
                    .col(uuid(CourseSubject::SubjectId))
                    .col(uuid(CourseSubject::TeacherVinculoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_subject_course_id")
                            .from(CourseSubject::Table, CourseSubject::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_subject_subject_id")
                            .from(CourseSubject::Table, CourseSubject::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_subject_teacher_vinculo_id")
                            .from(CourseSubject::Table, CourseSubject::TeacherVinculoId)
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
            .drop_table(Table::drop().table(CourseSubject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseSubject {
    #[sea_orm(iden = "course_subjects")]
    Table,
    Id,
    CourseId,
    SubjectId,
    TeacherVinculoId,
}
