use crate::server::data::vinculo::VinculoRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, person::PersonFactory, vinculo::VinculoFactory},
};

mod find_by_person_and_school;
mod get_school_admins;
