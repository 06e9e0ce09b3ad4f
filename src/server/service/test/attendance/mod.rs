use crate::{
    model::attendance::{AttendanceEntryDto, AttendanceMarkDto, TakeAttendanceDto},
    server::{error::AppError, service::attendance::AttendanceService},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod day;
mod students;
mod take;
mod update;

/// A school day within the course's year.
fn school_day(course: &entity::course::Model) -> NaiveDate {
    NaiveDate::from_ymd_opt(course.year, 3, 3).unwrap()
}

fn entry(student_id: Uuid, estado: &str) -> AttendanceEntryDto {
    AttendanceEntryDto {
        alumno_vinculo_id: student_id,
        estado: estado.to_string(),
    }
}
