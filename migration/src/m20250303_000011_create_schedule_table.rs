use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000008_create_course_subject_table::CourseSubject,
    m20250303_000010_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_uuid(Schedule::Id))
                    .col(uuid(Schedule::CourseSubjectId))
                    .col(integer(Schedule::Weekday))
                    .col(time(Schedule::StartTime))
                    .col(time(Schedule::EndTime))
                    .col(uuid_null(Schedule::RoomId))
                    .col(date_null(Schedule::ValidFrom))
                    .col(date_null(Schedule::ValidUntil))
                    .col(boolean(Schedule::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_course_subject_id")
                            .from(Schedule::Table, Schedule::CourseSubjectId)
                            .to(CourseSubject::Table, CourseSubject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_room_id")
                            .from(Schedule::Table, Schedule::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    #[sea_orm(iden = "schedules")]
    Table,
    Id,
    CourseSubjectId,
    Weekday,
    StartTime,
    EndTime,
    RoomId,
    ValidFrom,
    ValidUntil,
    Active,
}
