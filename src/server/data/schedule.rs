use chrono::{Datelike, NaiveDate};
use sea_orm::{
    sea_query::ExprTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::{
    data::course_subject::CourseSubjectRepository, model::schedule::ScheduleSlot,
};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the teacher's active slots ordered by weekday, then start time.
    ///
    /// # Arguments
    /// - `teacher_id` - Vinculo of the teacher
    /// - `on` - When set, only slots falling on that date's weekday whose
    ///   validity window contains it
    pub async fn get_active_for_teacher(
        &self,
        teacher_id: Uuid,
        on: Option<NaiveDate>,
    ) -> Result<Vec<ScheduleSlot>, DbErr> {
        let details: HashMap<Uuid, _> = CourseSubjectRepository::new(self.db)
            .get_details_for_teacher(teacher_id, None)
            .await?
            .into_iter()
            .map(|d| (d.course_subject.id, d))
            .collect();

        if details.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::CourseSubjectId.is_in(details.keys().copied()))
            .filter(entity::schedule::Column::Active.eq(true));

        if let Some(date) = on {
            let weekday = date.weekday().num_days_from_sunday() as i32;
            query = query
                .filter(entity::schedule::Column::Weekday.eq(weekday))
                .filter(
                    entity::schedule::Column::ValidFrom
                        .is_null()
                        .or(entity::schedule::Column::ValidFrom.lte(date)),
                )
                .filter(
                    entity::schedule::Column::ValidUntil
                        .is_null()
                        .or(entity::schedule::Column::ValidUntil.gte(date)),
                );
        }

        let schedules = query
            .order_by_asc(entity::schedule::Column::Weekday)
            .order_by_asc(entity::schedule::Column::StartTime)
            .all(self.db)
            .await?;

        let room_ids: Vec<Uuid> = schedules.iter().filter_map(|s| s.room_id).collect();
        let rooms: HashMap<Uuid, String> = if room_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Room::find()
                .filter(entity::room::Column::Id.is_in(room_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| (r.id, r.name))
                .collect()
        };

        Ok(schedules
            .into_iter()
            .filter_map(|s| {
                let detail = details.get(&s.course_subject_id)?;
                Some(ScheduleSlot {
                    id: s.id,
                    weekday: s.weekday,
                    start_time: s.start_time,
                    end_time: s.end_time,
                    course_id: detail.course.id,
                    course_name: detail.course.name.clone(),
                    subject_id: detail.subject.id,
                    subject_name: detail.subject.name.clone(),
                    room_name: s.room_id.and_then(|id| rooms.get(&id).cloned()),
                    room_id: s.room_id,
                })
            })
            .collect())
    }
}
