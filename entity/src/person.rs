use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub rut: Option<String>,
    pub first_name: String,
    pub paternal_surname: Option<String>,
    pub maternal_surname: Option<String>,
    pub contact_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contact::Entity",
        from = "Column::ContactId",
        to = "super::contact::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Contact,
    #[sea_orm(has_many = "super::vinculo::Entity")]
    Vinculo,
}

impl Related<super::contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contact.def()
    }
}

impl Related<super::vinculo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vinculo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
