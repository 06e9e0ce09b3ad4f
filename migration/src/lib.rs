pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_school_table;
mod m20250301_000002_create_role_table;
mod m20250301_000003_create_contact_table;
mod m20250301_000004_create_person_table;
mod m20250301_000005_create_vinculo_table;
mod m20250302_000006_create_course_table;
mod m20250302_000007_create_subject_table;
mod m20250302_000008_create_course_subject_table;
mod m20250302_000009_create_teacher_subject_table;
mod m20250303_000010_create_room_table;
mod m20250303_000011_create_schedule_table;
mod m20250303_000012_create_class_session_table;
mod m20250304_000013_create_enrollment_table;
mod m20250304_000014_create_daily_attendance_table;
mod m20250304_000015_create_evaluation_table;
mod m20250304_000016_create_grade_table;
mod m20250305_000017_create_observation_table;
mod m20250306_000018_create_notification_table;
mod m20250306_000019_create_notification_recipient_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_school_table::Migration),
            Box::new(m20250301_000002_create_role_table::Migration),
            Box::new(m20250301_000003_create_contact_table::Migration),
            Box::new(m20250301_000004_create_person_table::Migration),
            Box::new(m20250301_000005_create_vinculo_table::Migration),
            Box::new(m20250302_000006_create_course_table::Migration),
            Box::new(m20250302_000007_create_subject_table::Migration),
            Box::new(m20250302_000008_create_course_subject_table::Migration),
            Box::new(m20250302_000009_create_teacher_subject_table::Migration),
            Box::new(m20250303_000010_create_room_table::Migration),
            Box::new(m20250303_000011_create_schedule_table::Migration),
            Box::new(m20250303_000012_create_class_session_table::Migration),
            Box::new(m20250304_000013_create_enrollment_table::Migration),
            Box::new(m20250304_000014_create_daily_attendance_table::Migration),
            Box::new(m20250304_000015_create_evaluation_table::Migration),
            Box::new(m20250304_000016_create_grade_table::Migration),
            Box::new(m20250305_000017_create_observation_table::Migration),
            Box::new(m20250306_000018_create_notification_table::Migration),
            Box::new(m20250306_000019_create_notification_recipient_table::Migration),
        ]
    }
}
