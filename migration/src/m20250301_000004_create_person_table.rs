use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_contact_table::Contact;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_uuid(Person::Id))
                    .col(string_null(Person::Rut))
                    .col(string(Person::FirstName))
                    .col(string_null(Person::PaternalSurname))
                    .col(string_null(Person::MaternalSurname))
                    .col(uuid_null(Person::ContactId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_contact_id")
                            .from(Person::Table, Person::ContactId)
                            .to(Contact::Table, Contact::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Person {
    #[sea_orm(iden = "persons")]
    Table,
    Id,
    Rut,
    FirstName,
    PaternalSurname,
    MaternalSurname,
    ContactId,
}
