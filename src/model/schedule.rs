use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlotDto {
    pub horario_id: Uuid,
    pub start_time: String,
    pub end_time: String,
    pub subject_name: String,
    pub course_id: Uuid,
    pub course_name: String,
    pub sala_name: Option<String>,
}

/// Weekly timetable from Monday to Friday.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct WeekScheduleDto {
    pub monday: Vec<ScheduleSlotDto>,
    pub tuesday: Vec<ScheduleSlotDto>,
    pub wednesday: Vec<ScheduleSlotDto>,
    pub thursday: Vec<ScheduleSlotDto>,
    pub friday: Vec<ScheduleSlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStatsDto {
    pub total_horarios: u64,
    pub weekly_hours: f64,
    pub distinct_courses: u64,
    pub sala_count: u64,
}
