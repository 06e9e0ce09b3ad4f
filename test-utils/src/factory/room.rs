use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a room named `Sala {n}` for the specified school.
pub async fn create_room(
    db: &DatabaseConnection,
    school_id: Uuid,
) -> Result<entity::room::Model, DbErr> {
    entity::room::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        school_id: ActiveValue::Set(school_id),
        name: ActiveValue::Set(format!("Sala {}", next_id())),
        capacity: ActiveValue::Set(Some(40)),
        location: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
