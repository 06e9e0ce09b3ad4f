//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::{Datelike, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let course = CourseFactory::new(&db, school.id)
///     .name("3° Medio A")
///     .head_teacher(teacher.id)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    school_id: Uuid,
    name: String,
    level: Option<String>,
    year: i32,
    head_teacher_vinculo_id: Option<Uuid>,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {n}"` where n is auto-incremented
    /// - level: `Some("Media")`
    /// - year: the current calendar year
    /// - head teacher: `None`
    pub fn new(db: &'a DatabaseConnection, school_id: Uuid) -> Self {
        Self {
            db,
            school_id,
            name: format!("Course {}", next_id()),
            level: Some("Media".to_string()),
            year: Utc::now().year(),
            head_teacher_vinculo_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the head teacher (profesor jefe) vinculo.
    pub fn head_teacher(mut self, vinculo_id: Uuid) -> Self {
        self.head_teacher_vinculo_id = Some(vinculo_id);
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            school_id: ActiveValue::Set(self.school_id),
            name: ActiveValue::Set(self.name),
            level: ActiveValue::Set(self.level),
            year: ActiveValue::Set(self.year),
            head_teacher_vinculo_id: ActiveValue::Set(self.head_teacher_vinculo_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values for the specified school.
pub async fn create_course(
    db: &DatabaseConnection,
    school_id: Uuid,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, school_id).build().await
}
