use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250304_000015_create_evaluation_table::Evaluation,
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
                    .table(Grade::Table)
                    .if_not_exists()
                    .col(pk_uuid(Grade::Id))
                    .col(uuid(Grade::EvaluationId))
                    .col(uuid(Grade::StudentVinculoId))
                    .col(double(Grade::Value))
                    .col(text_null(Grade::Feedback))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_evaluation_id")
                            .from(Grade::Table, Grade::EvaluationId)
                            .to(Evaluation::Table, Evaluation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_student_vinculo_id")
                            .from(Grade::Table, Grade::StudentVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_grade_unique")
                            .col(Grade::EvaluationId)
                            .col(Grade::StudentVinculoId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Grade {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    EvaluationId,
    StudentVinculoId,
    Value,
    Feedback,
}
