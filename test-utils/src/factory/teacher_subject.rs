use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Records that a teacher is qualified for a subject.
pub async fn create_teacher_subject(
    db: &DatabaseConnection,
    teacher_vinculo_id: Uuid,
    subject_id: Uuid,
) -> Result<entity::teacher_subject::Model, DbErr> {
    entity::teacher_subject::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        teacher_vinculo_id: ActiveValue::Set(teacher_vinculo_id),
        subject_id: ActiveValue::Set(subject_id),
    }
    .insert(db)
    .await
}
