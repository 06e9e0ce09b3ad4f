use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Records a grade for a student on an evaluation.
pub async fn create_grade(
    db: &DatabaseConnection,
    evaluation_id: Uuid,
    student_vinculo_id: Uuid,
    value: f64,
) -> Result<entity::grade::Model, DbErr> {
    entity::grade::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        evaluation_id: ActiveValue::Set(evaluation_id),
        student_vinculo_id: ActiveValue::Set(student_vinculo_id),
        value: ActiveValue::Set(value),
        feedback: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
