use sea_orm::entity::prelude::*;

/// Institutional role such as `profesor`, `alumno` or `administrador`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vinculo::Entity")]
    Vinculo,
}

impl Related<super::vinculo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vinculo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
