use crate::server::data::grade::GradeRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_graded;
mod upsert;
