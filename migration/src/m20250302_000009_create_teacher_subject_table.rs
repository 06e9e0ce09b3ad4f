use sea_orm_migration::{prelude::*, schema::*};

use super::{
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
                    .table(TeacherSubject::Table)
                    .if_not_exists()
                    .col(pk_uuid(TeacherSubject::Id))
                    .col(uuid(TeacherSubject::TeacherVinculoId))
                    .col(uuid(TeacherSubject::SubjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_subject_teacher_vinculo_id")
                            .from(TeacherSubject::Table, TeacherSubject::TeacherVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_subject_subject_id")
                            .from(TeacherSubject::Table, TeacherSubject::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_teacher_subject_unique")
                            .col(TeacherSubject::TeacherVinculoId)
                            .col(TeacherSubject::SubjectId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeacherSubject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeacherSubject {
    #[sea_orm(iden = "teacher_subjects")]
    Table,
    Id,
    TeacherVinculoId,
    SubjectId,
}
