use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashSet;
use uuid::Uuid;

use crate::server::{data::vinculo::VinculoRepository, model::student::Student};

pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the distinct student vinculos enrolled in a course for a year.
    pub async fn get_student_ids(&self, course_id: Uuid, year: i32) -> Result<Vec<Uuid>, DbErr> {
        let mut seen = HashSet::new();

        Ok(entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .filter(entity::enrollment::Column::Year.eq(year))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| e.student_vinculo_id)
            .filter(|id| seen.insert(*id))
            .collect())
    }

    pub async fn count_students(&self, course_id: Uuid, year: i32) -> Result<u64, DbErr> {
        Ok(self.get_student_ids(course_id, year).await?.len() as u64)
    }

    /// Returns the ids among `student_ids` that are not enrolled in the course for the year.
    pub async fn find_unenrolled(
        &self,
        course_id: Uuid,
        year: i32,
        student_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, DbErr> {
        let enrolled: HashSet<Uuid> = self.get_student_ids(course_id, year).await?.into_iter().collect();

        Ok(student_ids
            .iter()
            .filter(|id| !enrolled.contains(id))
            .copied()
            .collect())
    }

    pub async fn is_enrolled(&self, student_id: Uuid, course_id: Uuid, year: i32) -> Result<bool, DbErr> {
        Ok(self
            .find_unenrolled(course_id, year, &[student_id])
            .await?
            .is_empty())
    }

    /// Gets students enrolled in a course for a year, sorted for display.
    pub async fn get_students(&self, course_id: Uuid, year: i32) -> Result<Vec<Student>, DbErr> {
        let ids = self.get_student_ids(course_id, year).await?;
        let persons = VinculoRepository::new(self.db).get_persons(ids.clone()).await?;

        let mut students: Vec<Student> = ids
            .into_iter()
            .map(|id| Student::from_entity(id, persons.get(&id)))
            .collect();
        Student::sort(&mut students);

        Ok(students)
    }
}
