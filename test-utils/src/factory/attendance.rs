use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Records a daily attendance mark.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_id` - Course the mark belongs to
/// - `student_vinculo_id` - Student being marked
/// - `date` - Day of the mark
/// - `status` - `"presente"`, `"ausente"` or `"tardanza"`
/// - `recorded_by` - Vinculo of the teacher recording the mark
pub async fn create_attendance(
    db: &DatabaseConnection,
    course_id: Uuid,
    student_vinculo_id: Uuid,
    date: NaiveDate,
    status: &str,
    recorded_by: Uuid,
) -> Result<entity::daily_attendance::Model, DbErr> {
    let now = Utc::now();
    entity::daily_attendance::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        course_id: ActiveValue::Set(course_id),
        student_vinculo_id: ActiveValue::Set(student_vinculo_id),
        date: ActiveValue::Set(date),
        status: ActiveValue::Set(status.to_string()),
        recorded_by_vinculo_id: ActiveValue::Set(recorded_by),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
