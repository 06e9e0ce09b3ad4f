use crate::server::{data::attendance::AttendanceRepository, model::attendance::AttendanceStatus};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_course_and_date;
mod upsert;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}
