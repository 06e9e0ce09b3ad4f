use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000006_create_course_table::Course,
    m20250302_000008_create_course_subject_table::CourseSubject,
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
                    .table(Observation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Observation::Id))
                    .col(uuid(Observation::StudentVinculoId))
                    .col(uuid(Observation::TeacherVinculoId))
                    .col(uuid(Observation::CourseId))
                    .col(uuid_null(Observation::CourseSubjectId))
                    .col(string_null(Observation::Title))
                    .col(text(Observation::Description))
                    .col(string(Observation::Kind))
                    .col(
                        timestamp_with_time_zone(Observation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_observation_student_vinculo_id")
                            .from(Observation::Table, Observation::StudentVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_observation_teacher_vinculo_id")
                            .from(Observation::Table, Observation::TeacherVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_observation_course_id")
                            .from(Observation::Table, Observation::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_observation_course_subject_id")
                            .from(Observation::Table, Observation::CourseSubjectId)
                            .to(CourseSubject::Table, CourseSubject::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Observation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Observation {
    #[sea_orm(iden = "observations")]
    Table,
    Id,
    StudentVinculoId,
    TeacherVinculoId,
    CourseId,
    CourseSubjectId,
    Title,
    Description,
    Kind,
    CreatedAt,
}
