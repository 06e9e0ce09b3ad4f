use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000006_create_course_table::Course,
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
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_uuid(Enrollment::Id))
                    .col(uuid(Enrollment::StudentVinculoId))
                    .col(uuid(Enrollment::CourseId))
                    .col(integer(Enrollment::Year))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student_vinculo_id")
                            .from(Enrollment::Table, Enrollment::StudentVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course_id")
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_enrollment_unique")
                            .col(Enrollment::StudentVinculoId)
                            .col(Enrollment::CourseId)
                            .col(Enrollment::Year),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    StudentVinculoId,
    CourseId,
    Year,
}
