use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct EvaluationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EvaluationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new evaluation for a course subject
    pub async fn create(
        &self,
        course_subject_id: Uuid,
        name: String,
        date: NaiveDate,
        kind: String,
    ) -> Result<entity::evaluation::Model, DbErr> {
        entity::evaluation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            course_subject_id: ActiveValue::Set(course_subject_id),
            name: ActiveValue::Set(name),
            date: ActiveValue::Set(date),
            kind: ActiveValue::Set(kind),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::evaluation::Model>, DbErr> {
        entity::prelude::Evaluation::find_by_id(id).one(self.db).await
    }

    /// Gets evaluations of a course subject, newest first
    pub async fn get_by_course_subject(
        &self,
        course_subject_id: Uuid,
    ) -> Result<Vec<entity::evaluation::Model>, DbErr> {
        entity::prelude::Evaluation::find()
            .filter(entity::evaluation::Column::CourseSubjectId.eq(course_subject_id))
            .order_by_desc(entity::evaluation::Column::Date)
            .order_by_asc(entity::evaluation::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets evaluations of several course subjects, newest first
    pub async fn get_by_course_subjects(
        &self,
        course_subject_ids: Vec<Uuid>,
    ) -> Result<Vec<entity::evaluation::Model>, DbErr> {
        if course_subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Evaluation::find()
            .filter(entity::evaluation::Column::CourseSubjectId.is_in(course_subject_ids))
            .order_by_desc(entity::evaluation::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn count_by_course_subject(&self, course_subject_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Evaluation::find()
            .filter(entity::evaluation::Column::CourseSubjectId.eq(course_subject_id))
            .count(self.db)
            .await
    }
}
