use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_school_table::School;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_uuid(Room::Id))
                    .col(uuid(Room::SchoolId))
                    .col(string(Room::Name))
                    .col(integer_null(Room::Capacity))
                    .col(string_null(Room::Location))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_school_id")
                            .from(Room::Table, Room::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    SchoolId,
    Name,
    Capacity,
    Location,
}
