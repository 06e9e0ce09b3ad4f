use chrono::{DateTime, NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::model::attendance::AttendanceStatus;

/// Daily attendance queries; runs on the pool or inside a transaction.
pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every attendance record of a course.
    pub async fn get_by_course(
        &self,
        course_id: Uuid,
    ) -> Result<Vec<entity::daily_attendance::Model>, DbErr> {
        entity::prelude::DailyAttendance::find()
            .filter(entity::daily_attendance::Column::CourseId.eq(course_id))
            .all(self.db)
            .await
    }

    pub async fn get_by_course_and_date(
        &self,
        course_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<entity::daily_attendance::Model>, DbErr> {
        entity::prelude::DailyAttendance::find()
            .filter(entity::daily_attendance::Column::CourseId.eq(course_id))
            .filter(entity::daily_attendance::Column::Date.eq(date))
            .all(self.db)
            .await
    }

    /// Inserts or updates the record for (student, course, date).
    ///
    /// An existing record keeps its `created_at`; status, recorder and
    /// `updated_at` are overwritten.
    pub async fn upsert(
        &self,
        course_id: Uuid,
        student_id: Uuid,
        date: NaiveDate,
        status: AttendanceStatus,
        recorded_by: Uuid,
        now: DateTime<Utc>,
    ) -> Result<entity::daily_attendance::Model, DbErr> {
        entity::prelude::DailyAttendance::insert(entity::daily_attendance::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            course_id: ActiveValue::Set(course_id),
            student_vinculo_id: ActiveValue::Set(student_id),
            date: ActiveValue::Set(date),
            status: ActiveValue::Set(status.as_str().to_string()),
            recorded_by_vinculo_id: ActiveValue::Set(recorded_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::daily_attendance::Column::StudentVinculoId,
                entity::daily_attendance::Column::CourseId,
                entity::daily_attendance::Column::Date,
            ])
            .update_columns([
                entity::daily_attendance::Column::Status,
                entity::daily_attendance::Column::RecordedByVinculoId,
                entity::daily_attendance::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
