use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Assigns a teacher to a subject in a course.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_id` - Course the subject is taught in
/// - `subject_id` - Subject being taught
/// - `teacher_vinculo_id` - Vinculo of the teaching teacher
///
/// # Returns
/// - `Ok(entity::course_subject::Model)` - Created course subject
/// - `Err(DbErr)` - Database error during insert
pub async fn create_course_subject(
    db: &DatabaseConnection,
    course_id: Uuid,
    subject_id: Uuid,
    teacher_vinculo_id: Uuid,
) -> Result<entity::course_subject::Model, DbErr> {
    entity::course_subject::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        course_id: ActiveValue::Set(course_id),
        subject_id: ActiveValue::Set(subject_id),
        teacher_vinculo_id: ActiveValue::Set(teacher_vinculo_id),
    }
    .insert(db)
    .await
}
