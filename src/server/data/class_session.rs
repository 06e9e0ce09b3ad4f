use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::server::{
    data::course_subject::CourseSubjectRepository, model::course_subject::CourseSubjectDetail,
};

pub struct ClassSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the teacher's most recent class session by date, then start time.
    ///
    /// # Arguments
    /// - `teacher_id` - Vinculo of the teacher
    /// - `course_id` - Restrict to one course when set
    pub async fn find_latest_for_teacher(
        &self,
        teacher_id: Uuid,
        course_id: Option<Uuid>,
    ) -> Result<Option<(entity::class_session::Model, CourseSubjectDetail)>, DbErr> {
        let details = CourseSubjectRepository::new(self.db)
            .get_details_for_teacher(teacher_id, course_id)
            .await?;

        if details.is_empty() {
            return Ok(None);
        }

        let Some(session) = entity::prelude::ClassSession::find()
            .filter(
                entity::class_session::Column::CourseSubjectId
                    .is_in(details.iter().map(|d| d.course_subject.id)),
            )
            .order_by_desc(entity::class_session::Column::Date)
            .order_by_desc(entity::class_session::Column::StartTime)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(details
            .into_iter()
            .find(|d| d.course_subject.id == session.course_subject_id)
            .map(|detail| (session, detail)))
    }
}
