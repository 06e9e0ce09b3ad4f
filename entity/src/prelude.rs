pub use super::class_session::Entity as ClassSession;
pub use super::contact::Entity as Contact;
pub use super::course::Entity as Course;
pub use super::course_subject::Entity as CourseSubject;
pub use super::daily_attendance::Entity as DailyAttendance;
pub use super::enrollment::Entity as Enrollment;
pub use super::evaluation::Entity as Evaluation;
pub use super::grade::Entity as Grade;
pub use super::notification::Entity as Notification;
pub use super::notification_recipient::Entity as NotificationRecipient;
pub use super::observation::Entity as Observation;
pub use super::person::Entity as Person;
pub use super::role::Entity as Role;
pub use super::room::Entity as Room;
pub use super::schedule::Entity as Schedule;
pub use super::school::Entity as School;
pub use super::subject::Entity as Subject;
pub use super::teacher_subject::Entity as TeacherSubject;
pub use super::vinculo::Entity as Vinculo;
