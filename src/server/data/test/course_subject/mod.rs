use crate::server::data::course_subject::CourseSubjectRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_details_for_teacher;
mod teaches_subject;
