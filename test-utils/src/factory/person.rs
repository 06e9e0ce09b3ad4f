//! Person factory for creating test person entities.
//!
//! A person optionally carries a contact row holding their personal email.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test persons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let person = PersonFactory::new(&db)
///     .first_name("Ana")
///     .paternal_surname("Rojas")
///     .email("ana@example.com")
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    rut: Option<String>,
    first_name: String,
    paternal_surname: Option<String>,
    maternal_surname: Option<String>,
    email: Option<String>,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - rut: `"{n}-K"` where n is auto-incremented
    /// - first_name: `"Name {n}"`
    /// - paternal_surname: `"Surname {n}"`
    /// - maternal_surname: `None`
    /// - email: `None` (no contact row)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            rut: Some(format!("{}-K", id)),
            first_name: format!("Name {}", id),
            paternal_surname: Some(format!("Surname {}", id)),
            maternal_surname: None,
            email: None,
        }
    }

    pub fn rut(mut self, rut: impl Into<String>) -> Self {
        self.rut = Some(rut.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn paternal_surname(mut self, surname: impl Into<String>) -> Self {
        self.paternal_surname = Some(surname.into());
        self
    }

    pub fn maternal_surname(mut self, surname: impl Into<String>) -> Self {
        self.maternal_surname = Some(surname.into());
        self
    }

    /// Sets a personal email, stored on a dedicated contact row.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds and inserts the person, plus a contact row when an email was set.
    ///
    /// # Returns
    /// - `Ok(entity::person::Model)` - Created person entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        let contact_id = match self.email {
            Some(email) => {
                let contact = entity::contact::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    email: ActiveValue::Set(Some(email)),
                }
                .insert(self.db)
                .await?;
                Some(contact.id)
            }
            None => None,
        };

        entity::person::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            rut: ActiveValue::Set(self.rut),
            first_name: ActiveValue::Set(self.first_name),
            paternal_surname: ActiveValue::Set(self.paternal_surname),
            maternal_surname: ActiveValue::Set(self.maternal_surname),
            contact_id: ActiveValue::Set(contact_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}
