use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    model::schedule::{ScheduleStatsDto, WeekScheduleDto},
    server::{
        data::schedule::ScheduleRepository,
        error::AppError,
        model::schedule::{ScheduleStats, WeekSchedule},
    },
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the teacher's active timetable grouped Monday through Friday
    pub async fn week(&self, teacher_id: Uuid) -> Result<WeekScheduleDto, AppError> {
        let slots = ScheduleRepository::new(self.db)
            .get_active_for_teacher(teacher_id, None)
            .await?;

        Ok(WeekSchedule::from_slots(slots).into_dto())
    }

    /// Gets totals over the teacher's active timetable
    pub async fn stats(&self, teacher_id: Uuid) -> Result<ScheduleStatsDto, AppError> {
        let slots = ScheduleRepository::new(self.db)
            .get_active_for_teacher(teacher_id, None)
            .await?;

        let courses: HashSet<Uuid> = slots.iter().map(|s| s.course_id).collect();
        let rooms: HashSet<Uuid> = slots.iter().filter_map(|s| s.room_id).collect();

        Ok(ScheduleStats {
            total_slots: slots.len() as u64,
            weekly_hours: slots.iter().map(|s| s.hours()).sum(),
            distinct_courses: courses.len() as u64,
            room_count: rooms.len() as u64,
        }
        .into_dto())
    }
}
