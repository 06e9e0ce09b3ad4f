use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Enrolls a student vinculo in a course for the given academic year.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    student_vinculo_id: Uuid,
    course_id: Uuid,
    year: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        student_vinculo_id: ActiveValue::Set(student_vinculo_id),
        course_id: ActiveValue::Set(course_id),
        year: ActiveValue::Set(year),
    }
    .insert(db)
    .await
}
