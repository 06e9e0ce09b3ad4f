use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashSet;
use uuid::Uuid;

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// Returns whether the vinculo is the course's head teacher.
    pub async fn is_head_teacher(&self, teacher_id: Uuid, course_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.eq(course_id))
            .filter(entity::course::Column::HeadTeacherVinculoId.eq(teacher_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the courses a teacher heads, newest year first, then by name.
    pub async fn get_headed_by(&self, teacher_id: Uuid) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::HeadTeacherVinculoId.eq(teacher_id))
            .order_by_desc(entity::course::Column::Year)
            .order_by_asc(entity::course::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets every course a teacher teaches a subject in or heads.
    ///
    /// Each course appears once; ordering is left to the caller.
    pub async fn get_for_teacher(&self, teacher_id: Uuid) -> Result<Vec<entity::course::Model>, DbErr> {
        let taught: HashSet<Uuid> = entity::prelude::CourseSubject::find()
            .filter(entity::course_subject::Column::TeacherVinculoId.eq(teacher_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|cs| cs.course_id)
            .collect();

        let mut courses = if taught.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Course::find()
                .filter(entity::course::Column::Id.is_in(taught))
                .all(self.db)
                .await?
        };

        let seen: HashSet<Uuid> = courses.iter().map(|c| c.id).collect();
        courses.extend(
            self.get_headed_by(teacher_id)
                .await?
                .into_iter()
                .filter(|c| !seen.contains(&c.id)),
        );

        Ok(courses)
    }
}
