//! Schedule factory for weekly timetable slots.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test schedules with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let slot = ScheduleFactory::new(&db, course_subject.id)
///     .weekday(1)
///     .times(8, 0, 9, 30)
///     .room(room.id)
///     .build()
///     .await?;
/// ```
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    course_subject_id: Uuid,
    weekday: i32,
    start_time: NaiveTime,
    end_time: NaiveTime,
    room_id: Option<Uuid>,
    valid_from: Option<NaiveDate>,
    valid_until: Option<NaiveDate>,
    active: bool,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values.
    ///
    /// Defaults:
    /// - weekday: `1` (Monday)
    /// - times: 08:00 to 09:00
    /// - room: `None`
    /// - validity window: unbounded
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, course_subject_id: Uuid) -> Self {
        Self {
            db,
            course_subject_id,
            weekday: 1,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            room_id: None,
            valid_from: None,
            valid_until: None,
            active: true,
        }
    }

    /// Sets the day of week, 0 = Sunday through 6 = Saturday.
    pub fn weekday(mut self, weekday: i32) -> Self {
        self.weekday = weekday;
        self
    }

    /// Sets start and end as hour/minute pairs.
    pub fn times(mut self, start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Self {
        self.start_time = NaiveTime::from_hms_opt(start_h, start_m, 0).unwrap_or_default();
        self.end_time = NaiveTime::from_hms_opt(end_h, end_m, 0).unwrap_or_default();
        self
    }

    pub fn room(mut self, room_id: Uuid) -> Self {
        self.room_id = Some(room_id);
        self
    }

    pub fn valid_between(mut self, from: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        self.valid_from = from;
        self.valid_until = until;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the schedule entity into the database.
    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            course_subject_id: ActiveValue::Set(self.course_subject_id),
            weekday: ActiveValue::Set(self.weekday),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            room_id: ActiveValue::Set(self.room_id),
            valid_from: ActiveValue::Set(self.valid_from),
            valid_until: ActiveValue::Set(self.valid_until),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}
