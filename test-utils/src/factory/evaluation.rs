//! Evaluation factory for creating test evaluation entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test evaluations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let exam = EvaluationFactory::new(&db, course_subject.id)
///     .name("Solemne 1")
///     .kind("solemne")
///     .date(NaiveDate::from_ymd_opt(2025, 4, 10).unwrap())
///     .build()
///     .await?;
/// ```
pub struct EvaluationFactory<'a> {
    db: &'a DatabaseConnection,
    course_subject_id: Uuid,
    name: String,
    date: NaiveDate,
    kind: String,
}

impl<'a> EvaluationFactory<'a> {
    /// Creates a new EvaluationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Evaluation {n}"`
    /// - date: today
    /// - kind: `"prueba"`
    pub fn new(db: &'a DatabaseConnection, course_subject_id: Uuid) -> Self {
        Self {
            db,
            course_subject_id,
            name: format!("Evaluation {}", next_id()),
            date: Utc::now().date_naive(),
            kind: "prueba".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the evaluation type; `solemne` and `coef2` weigh double.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builds and inserts the evaluation entity into the database.
    pub async fn build(self) -> Result<entity::evaluation::Model, DbErr> {
        entity::evaluation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            course_subject_id: ActiveValue::Set(self.course_subject_id),
            name: ActiveValue::Set(self.name),
            date: ActiveValue::Set(self.date),
            kind: ActiveValue::Set(self.kind),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `prueba` evaluation dated today.
pub async fn create_evaluation(
    db: &DatabaseConnection,
    course_subject_id: Uuid,
) -> Result<entity::evaluation::Model, DbErr> {
    EvaluationFactory::new(db, course_subject_id).build().await
}
