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
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_uuid(Course::Id))
                    .col(uuid(Course::SchoolId))
                    .col(string(Course::Name))
                    .col(string_null(Course::Level))
                    .col(integer(Course::Year))
                    .col(uuid_null(Course::HeadTeacherVinculoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_school_id")
                            .from(Course::Table, Course::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_head_teacher_vinculo_id")
                            .from(Course::Table, Course::HeadTeacherVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    SchoolId,
    Name,
    Level,
    Year,
    HeadTeacherVinculoId,
}
