mod attendance;
mod course;
mod course_subject;
mod enrollment;
mod grade;
mod notification;
mod schedule;
mod vinculo;
