use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_person_table::Person,
    m20250301_000002_create_role_table::Role,
    m20250301_000001_create_school_table::School,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vinculo::Table)
                    .if_not_exists()
                    .col(pk_uuid(Vinculo::Id))
                    .col(uuid(Vinculo::PersonId))
                    .col(uuid(Vinculo::SchoolId))
                    .col(uuid(Vinculo::RoleId))
                    .col(string_null(Vinculo::InstitutionalEmail))
                    .col(string_null(Vinculo::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vinculo_person_id")
                            .from(Vinculo::Table, Vinculo::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vinculo_school_id")
                            .from(Vinculo::Table, Vinculo::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vinculo_role_id")
                            .from(Vinculo::Table, Vinculo::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vinculo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vinculo {
    #[sea_orm(iden = "vinculos")]
    Table,
    Id,
    PersonId,
    SchoolId,
    RoleId,
    InstitutionalEmail,
    Status,
}
