use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find_by_id(id).one(self.db).await
    }

    /// Gets the subjects a teacher is qualified for, ordered by name.
    pub async fn get_qualified_for(&self, teacher_id: Uuid) -> Result<Vec<entity::subject::Model>, DbErr> {
        let subject_ids: Vec<Uuid> = entity::prelude::TeacherSubject::find()
            .filter(entity::teacher_subject::Column::TeacherVinculoId.eq(teacher_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|ts| ts.subject_id)
            .collect();

        if subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Subject::find()
            .filter(entity::subject::Column::Id.is_in(subject_ids))
            .order_by_asc(entity::subject::Column::Name)
            .all(self.db)
            .await
    }
}
