use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a subject named `Subject {n}` for the specified school.
pub async fn create_subject(
    db: &DatabaseConnection,
    school_id: Uuid,
) -> Result<entity::subject::Model, DbErr> {
    create_subject_named(db, school_id, format!("Subject {}", next_id())).await
}

/// Creates a subject with the given name.
pub async fn create_subject_named(
    db: &DatabaseConnection,
    school_id: Uuid,
    name: impl Into<String>,
) -> Result<entity::subject::Model, DbErr> {
    entity::subject::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        school_id: ActiveValue::Set(school_id),
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
