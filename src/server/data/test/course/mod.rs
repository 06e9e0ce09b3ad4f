use crate::server::data::course::CourseRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, course::CourseFactory},
};

mod get_for_teacher;
mod is_head_teacher;
