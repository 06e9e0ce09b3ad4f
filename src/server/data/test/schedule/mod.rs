use crate::server::data::schedule::ScheduleRepository;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, schedule::ScheduleFactory},
};

mod get_active_for_teacher;

/// Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}
