use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::observation::CreateObservationParams;

pub struct ObservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ObservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new observation authored by a teacher
    pub async fn create(
        &self,
        params: CreateObservationParams,
        now: DateTime<Utc>,
    ) -> Result<entity::observation::Model, DbErr> {
        entity::observation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            student_vinculo_id: ActiveValue::Set(params.student_id),
            teacher_vinculo_id: ActiveValue::Set(params.teacher_id),
            course_id: ActiveValue::Set(params.course_id),
            course_subject_id: ActiveValue::Set(params.course_subject_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Gets observations a teacher wrote in a course, newest first
    pub async fn get_by_teacher_and_course(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<entity::observation::Model>, DbErr> {
        entity::prelude::Observation::find()
            .filter(entity::observation::Column::TeacherVinculoId.eq(teacher_id))
            .filter(entity::observation::Column::CourseId.eq(course_id))
            .order_by_desc(entity::observation::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
