use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a school named `School {n}`.
pub async fn create_school(db: &DatabaseConnection) -> Result<entity::school::Model, DbErr> {
    create_school_named(db, format!("School {}", next_id())).await
}

/// Creates a school with the given name.
pub async fn create_school_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::school::Model, DbErr> {
    entity::school::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}
