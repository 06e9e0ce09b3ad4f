use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

/// Role names that identify school administrators.
pub const ADMIN_ROLES: [&str; 2] = ["administrador", "administrativo"];

pub struct VinculoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VinculoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::vinculo::Model>, DbErr> {
        entity::prelude::Vinculo::find_by_id(id).one(self.db).await
    }

    /// Finds the person behind a vinculo.
    pub async fn find_person(&self, vinculo_id: Uuid) -> Result<Option<entity::person::Model>, DbErr> {
        let Some(vinculo) = self.find_by_id(vinculo_id).await? else {
            return Ok(None);
        };

        entity::prelude::Person::find_by_id(vinculo.person_id)
            .one(self.db)
            .await
    }

    /// Finds the vinculo linking a person to a school.
    pub async fn find_by_person_and_school(
        &self,
        person_id: Uuid,
        school_id: Uuid,
    ) -> Result<Option<entity::vinculo::Model>, DbErr> {
        entity::prelude::Vinculo::find()
            .filter(entity::vinculo::Column::PersonId.eq(person_id))
            .filter(entity::vinculo::Column::SchoolId.eq(school_id))
            .one(self.db)
            .await
    }

    /// Finds a person together with their contact row.
    pub async fn find_person_with_contact(
        &self,
        person_id: Uuid,
    ) -> Result<Option<(entity::person::Model, Option<entity::contact::Model>)>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .find_also_related(entity::prelude::Contact)
            .one(self.db)
            .await
    }

    pub async fn find_school(&self, school_id: Uuid) -> Result<Option<entity::school::Model>, DbErr> {
        entity::prelude::School::find_by_id(school_id).one(self.db).await
    }

    /// Loads the person behind each vinculo id.
    ///
    /// Vinculos without a matching person are absent from the map.
    pub async fn get_persons(
        &self,
        vinculo_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, entity::person::Model>, DbErr> {
        if vinculo_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let vinculos = entity::prelude::Vinculo::find()
            .filter(entity::vinculo::Column::Id.is_in(vinculo_ids))
            .all(self.db)
            .await?;

        let person_ids: Vec<Uuid> = vinculos.iter().map(|v| v.person_id).collect();
        let persons: HashMap<Uuid, entity::person::Model> = entity::prelude::Person::find()
            .filter(entity::person::Column::Id.is_in(person_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(vinculos
            .into_iter()
            .filter_map(|v| persons.get(&v.person_id).cloned().map(|p| (v.id, p)))
            .collect())
    }

    /// Gets administrator vinculos of a school with their person and contact rows.
    ///
    /// A vinculo counts as administrator when its role is one of [`ADMIN_ROLES`].
    pub async fn get_school_admins(
        &self,
        school_id: Uuid,
    ) -> Result<
        Vec<(
            entity::vinculo::Model,
            entity::person::Model,
            Option<entity::contact::Model>,
        )>,
        DbErr,
    > {
        let role_ids: Vec<Uuid> = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.is_in(ADMIN_ROLES))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();

        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let vinculos = entity::prelude::Vinculo::find()
            .filter(entity::vinculo::Column::SchoolId.eq(school_id))
            .filter(entity::vinculo::Column::RoleId.is_in(role_ids))
            .all(self.db)
            .await?;

        let person_ids: Vec<Uuid> = vinculos.iter().map(|v| v.person_id).collect();
        let persons: HashMap<Uuid, (entity::person::Model, Option<entity::contact::Model>)> =
            entity::prelude::Person::find()
                .filter(entity::person::Column::Id.is_in(person_ids))
                .find_also_related(entity::prelude::Contact)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(p, c)| (p.id, (p, c)))
                .collect();

        Ok(vinculos
            .into_iter()
            .filter_map(|v| {
                persons
                    .get(&v.person_id)
                    .cloned()
                    .map(|(person, contact)| (v, person, contact))
            })
            .collect())
    }
}
