use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Records a held class for a course subject, 08:00 to 09:00 on the given date.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_subject_id` - Course subject the class belongs to
/// - `date` - Day the class took place
/// - `topic` - Optional topic covered
pub async fn create_class_session(
    db: &DatabaseConnection,
    course_subject_id: Uuid,
    date: NaiveDate,
    topic: Option<&str>,
) -> Result<entity::class_session::Model, DbErr> {
    entity::class_session::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        course_subject_id: ActiveValue::Set(course_subject_id),
        date: ActiveValue::Set(date),
        start_time: ActiveValue::Set(NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()),
        end_time: ActiveValue::Set(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()),
        topic: ActiveValue::Set(topic.map(str::to_string)),
        notes: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
