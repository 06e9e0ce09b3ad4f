use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test observations.
///
/// # Example
///
/// ```rust,ignore
/// let note = ObservationFactory::new(&db, student.id, teacher.id, course.id)
///     .kind("negativa")
///     .build()
///     .await?;
/// ```
pub struct ObservationFactory<'a> {
    db: &'a DatabaseConnection,
    student_vinculo_id: Uuid,
    teacher_vinculo_id: Uuid,
    course_id: Uuid,
    course_subject_id: Option<Uuid>,
    title: Option<String>,
    description: String,
    kind: String,
    created_at: DateTime<Utc>,
}

impl<'a> ObservationFactory<'a> {
    /// Creates a new ObservationFactory with default values.
    ///
    /// Defaults:
    /// - kind: `"positiva"`
    /// - title: `None`
    /// - description: `"Test observation"`
    /// - created_at: now
    pub fn new(
        db: &'a DatabaseConnection,
        student_vinculo_id: Uuid,
        teacher_vinculo_id: Uuid,
        course_id: Uuid,
    ) -> Self {
        Self {
            db,
            student_vinculo_id,
            teacher_vinculo_id,
            course_id,
            course_subject_id: None,
            title: None,
            description: "Test observation".to_string(),
            kind: "positiva".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn course_subject(mut self, course_subject_id: Uuid) -> Self {
        self.course_subject_id = Some(course_subject_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the observation entity into the database.
    pub async fn build(self) -> Result<entity::observation::Model, DbErr> {
        entity::observation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            student_vinculo_id: ActiveValue::Set(self.student_vinculo_id),
            teacher_vinculo_id: ActiveValue::Set(self.teacher_vinculo_id),
            course_id: ActiveValue::Set(self.course_id),
            course_subject_id: ActiveValue::Set(self.course_subject_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            kind: ActiveValue::Set(self.kind),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}
