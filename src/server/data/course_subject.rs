use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::course_subject::CourseSubjectDetail;

pub struct CourseSubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseSubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::course_subject::Model>, DbErr> {
        entity::prelude::CourseSubject::find_by_id(id).one(self.db).await
    }

    /// Finds the course subject for a course and subject pair.
    ///
    /// When several teachers share the pair the first row found is returned.
    pub async fn find_by_course_and_subject(
        &self,
        course_id: Uuid,
        subject_id: Uuid,
    ) -> Result<Option<entity::course_subject::Model>, DbErr> {
        entity::prelude::CourseSubject::find()
            .filter(entity::course_subject::Column::CourseId.eq(course_id))
            .filter(entity::course_subject::Column::SubjectId.eq(subject_id))
            .one(self.db)
            .await
    }

    /// Gets a course subject with its course and subject rows.
    pub async fn find_detail(&self, id: Uuid) -> Result<Option<CourseSubjectDetail>, DbErr> {
        let Some(course_subject) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.attach_details(vec![course_subject]).await?.pop())
    }

    /// Returns whether the teacher teaches any subject in the course.
    pub async fn teaches_in_course(&self, teacher_id: Uuid, course_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::CourseSubject::find()
            .filter(entity::course_subject::Column::TeacherVinculoId.eq(teacher_id))
            .filter(entity::course_subject::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns whether the teacher teaches the given subject in the course.
    pub async fn teaches_subject(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
        subject_id: Uuid,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::CourseSubject::find()
            .filter(entity::course_subject::Column::TeacherVinculoId.eq(teacher_id))
            .filter(entity::course_subject::Column::CourseId.eq(course_id))
            .filter(entity::course_subject::Column::SubjectId.eq(subject_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the teacher's assignments with course and subject rows.
    ///
    /// # Arguments
    /// - `teacher_id` - Vinculo of the teacher
    /// - `course_id` - Restrict to one course when set
    pub async fn get_details_for_teacher(
        &self,
        teacher_id: Uuid,
        course_id: Option<Uuid>,
    ) -> Result<Vec<CourseSubjectDetail>, DbErr> {
        let mut query = entity::prelude::CourseSubject::find()
            .filter(entity::course_subject::Column::TeacherVinculoId.eq(teacher_id));
        if let Some(course_id) = course_id {
            query = query.filter(entity::course_subject::Column::CourseId.eq(course_id));
        }

        let rows = query.all(self.db).await?;
        self.attach_details(rows).await
    }

    /// Gets every course subject of a course regardless of teacher.
    pub async fn get_by_course(
        &self,
        course_id: Uuid,
    ) -> Result<Vec<entity::course_subject::Model>, DbErr> {
        entity::prelude::CourseSubject::find()
            .filter(entity::course_subject::Column::CourseId.eq(course_id))
            .all(self.db)
            .await
    }

    /// Batch-loads the course and subject of each row.
    ///
    /// Rows whose course or subject is missing are dropped.
    async fn attach_details(
        &self,
        rows: Vec<entity::course_subject::Model>,
    ) -> Result<Vec<CourseSubjectDetail>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<Uuid> = rows.iter().map(|cs| cs.course_id).collect();
        let subject_ids: Vec<Uuid> = rows.iter().map(|cs| cs.subject_id).collect();

        let courses: HashMap<Uuid, entity::course::Model> = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(course_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let subjects: HashMap<Uuid, entity::subject::Model> = entity::prelude::Subject::find()
            .filter(entity::subject::Column::Id.is_in(subject_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|course_subject| {
                let course = courses.get(&course_subject.course_id)?.clone();
                let subject = subjects.get(&course_subject.subject_id)?.clone();
                Some(CourseSubjectDetail {
                    course_subject,
                    course,
                    subject,
                })
            })
            .collect())
    }
}
