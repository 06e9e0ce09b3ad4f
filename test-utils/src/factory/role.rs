use crate::factory::helpers::next_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

/// Returns the role with the given name, creating it on first use.
///
/// Role names are unique, so tests that need "profesor" or "alumno" share one row.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Role name, e.g. `"profesor"`
///
/// # Returns
/// - `Ok(entity::role::Model)` - Existing or newly created role
/// - `Err(DbErr)` - Database error during lookup or insert
pub async fn find_or_create_role(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    if let Some(role) = entity::prelude::Role::find()
        .filter(entity::role::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(role);
    }

    entity::role::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await
}

/// Creates a role with a unique generated name.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    find_or_create_role(db, &format!("role-{}", next_id())).await
}
