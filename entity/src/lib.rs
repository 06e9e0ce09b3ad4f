//! SeaORM entity models for the school management schema.
//!
//! Every table uses a UUID primary key. Tables are grouped loosely as:
//!
//! - **Institution** - `school`, `role`, `person`, `contact`, `vinculo`
//! - **Curriculum** - `course`, `subject`, `course_subject`, `teacher_subject`
//! - **Timetable** - `room`, `schedule`, `class_session`
//! - **Records** - `enrollment`, `daily_attendance`, `evaluation`, `grade`, `observation`
//! - **Messaging** - `notification`, `notification_recipient`

pub mod prelude;

pub mod class_session;
pub mod contact;
pub mod course;
pub mod course_subject;
pub mod daily_attendance;
pub mod enrollment;
pub mod evaluation;
pub mod grade;
pub mod notification;
pub mod notification_recipient;
pub mod observation;
pub mod person;
pub mod role;
pub mod room;
pub mod schedule;
pub mod school;
pub mod subject;
pub mod teacher_subject;
pub mod vinculo;
