//! Timetable slots and their aggregates.

use chrono::NaiveTime;
use uuid::Uuid;

use crate::{
    model::{
        home::DayScheduleItemDto,
        schedule::{ScheduleSlotDto, ScheduleStatsDto, WeekScheduleDto},
    },
    server::util::date::format_time,
};

/// An active weekly slot resolved to course, subject and room names.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSlot {
    pub id: Uuid,
    /// 0 = Sunday through 6 = Saturday.
    pub weekday: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub course_id: Uuid,
    pub course_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub room_id: Option<Uuid>,
    pub room_name: Option<String>,
}

impl ScheduleSlot {
    /// Slot length in hours.
    pub fn hours(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 3600.0
    }

    pub fn into_day_dto(self) -> DayScheduleItemDto {
        DayScheduleItemDto {
            horario_id: self.id,
            day: self.weekday,
            start_time: format_time(self.start_time),
            end_time: format_time(self.end_time),
            course_id: self.course_id,
            course_name: self.course_name,
            subject_id: self.subject_id,
            subject_name: self.subject_name,
            sala_id: self.room_id,
            sala_name: self.room_name,
        }
    }

    pub fn into_week_dto(self) -> ScheduleSlotDto {
        ScheduleSlotDto {
            horario_id: self.id,
            start_time: format_time(self.start_time),
            end_time: format_time(self.end_time),
            subject_name: self.subject_name,
            course_id: self.course_id,
            course_name: self.course_name,
            sala_name: self.room_name,
        }
    }
}

/// Weekly timetable grouped Monday through Friday.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSchedule {
    pub monday: Vec<ScheduleSlot>,
    pub tuesday: Vec<ScheduleSlot>,
    pub wednesday: Vec<ScheduleSlot>,
    pub thursday: Vec<ScheduleSlot>,
    pub friday: Vec<ScheduleSlot>,
}

impl WeekSchedule {
    /// Groups slots by weekday, dropping weekend slots. Input order is preserved per day.
    pub fn from_slots(slots: Vec<ScheduleSlot>) -> Self {
        let mut week = Self::default();
        for slot in slots {
            let day = match slot.weekday {
                1 => &mut week.monday,
                2 => &mut week.tuesday,
                3 => &mut week.wednesday,
                4 => &mut week.thursday,
                5 => &mut week.friday,
                _ => continue,
            };
            day.push(slot);
        }
        week
    }

    pub fn into_dto(self) -> WeekScheduleDto {
        let convert = |slots: Vec<ScheduleSlot>| -> Vec<ScheduleSlotDto> {
            slots.into_iter().map(ScheduleSlot::into_week_dto).collect()
        };
        WeekScheduleDto {
            monday: convert(self.monday),
            tuesday: convert(self.tuesday),
            wednesday: convert(self.wednesday),
            thursday: convert(self.thursday),
            friday: convert(self.friday),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleStats {
    pub total_slots: u64,
    pub weekly_hours: f64,
    pub distinct_courses: u64,
    pub room_count: u64,
}

impl ScheduleStats {
    pub fn into_dto(self) -> ScheduleStatsDto {
        ScheduleStatsDto {
            total_horarios: self.total_slots,
            weekly_hours: self.weekly_hours,
            distinct_courses: self.distinct_courses,
            sala_count: self.room_count,
        }
    }
}
