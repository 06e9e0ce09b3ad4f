//! Vinculo factory for creating institutional links.

use crate::factory::{person::create_person, role::find_or_create_role};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test vinculos.
///
/// Creates the person and role on build when they were not provided.
///
/// # Example
///
/// ```rust,ignore
/// let teacher = VinculoFactory::new(&db, school.id)
///     .role("profesor")
///     .person_id(person.id)
///     .build()
///     .await?;
/// ```
pub struct VinculoFactory<'a> {
    db: &'a DatabaseConnection,
    school_id: Uuid,
    person_id: Option<Uuid>,
    role: String,
    institutional_email: Option<String>,
}

impl<'a> VinculoFactory<'a> {
    /// Creates a new VinculoFactory with default values.
    ///
    /// Defaults:
    /// - person: a fresh person from `create_person`
    /// - role: `"profesor"`
    /// - institutional_email: `None`
    pub fn new(db: &'a DatabaseConnection, school_id: Uuid) -> Self {
        Self {
            db,
            school_id,
            person_id: None,
            role: "profesor".to_string(),
            institutional_email: None,
        }
    }

    pub fn person_id(mut self, person_id: Uuid) -> Self {
        self.person_id = Some(person_id);
        self
    }

    /// Sets the role by name; the role row is created if missing.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn institutional_email(mut self, email: impl Into<String>) -> Self {
        self.institutional_email = Some(email.into());
        self
    }

    /// Builds and inserts the vinculo entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vinculo::Model)` - Created vinculo entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vinculo::Model, DbErr> {
        let person_id = match self.person_id {
            Some(id) => id,
            None => create_person(self.db).await?.id,
        };
        let role = find_or_create_role(self.db, &self.role).await?;

        entity::vinculo::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            person_id: ActiveValue::Set(person_id),
            school_id: ActiveValue::Set(self.school_id),
            role_id: ActiveValue::Set(role.id),
            institutional_email: ActiveValue::Set(self.institutional_email),
            status: ActiveValue::Set(Some("activo".to_string())),
        }
        .insert(self.db)
        .await
    }
}
