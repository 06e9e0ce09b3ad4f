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
                    .table(DailyAttendance::Table)
                    .if_not_exists()
                    .col(pk_uuid(DailyAttendance::Id))
                    .col(uuid(DailyAttendance::CourseId))
                    .col(uuid(DailyAttendance::StudentVinculoId))
                    .col(date(DailyAttendance::Date))
                    .col(string(DailyAttendance::Status))
                    .col(uuid(DailyAttendance::RecordedByVinculoId))
                    .col(
                        timestamp_with_time_zone(DailyAttendance::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(DailyAttendance::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_attendance_course_id")
                            .from(DailyAttendance::Table, DailyAttendance::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_attendance_student_vinculo_id")
                            .from(DailyAttendance::Table, DailyAttendance::StudentVinculoId)
                            .to(Vinculo::Table, Vinculo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_daily_attendance_unique")
                            .col(DailyAttendance::StudentVinculoId)
                            .col(DailyAttendance::CourseId)
                            .col(DailyAttendance::Date),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyAttendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DailyAttendance {
    #[sea_orm(iden = "daily_attendance")]
    Table,
    Id,
    CourseId,
    StudentVinculoId,
    Date,
    Status,
    RecordedByVinculoId,
    CreatedAt,
    UpdatedAt,
}
