use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

pub struct GradeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every grade recorded for the given evaluations
    pub async fn get_by_evaluations(
        &self,
        evaluation_ids: Vec<Uuid>,
    ) -> Result<Vec<entity::grade::Model>, DbErr> {
        if evaluation_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Grade::find()
            .filter(entity::grade::Column::EvaluationId.is_in(evaluation_ids))
            .all(self.db)
            .await
    }

    /// Counts distinct graded students per evaluation.
    ///
    /// Evaluations without grades are absent from the map.
    pub async fn count_graded(
        &self,
        evaluation_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, u64>, DbErr> {
        let mut counts = HashMap::new();
        for grade in self.get_by_evaluations(evaluation_ids).await? {
            *counts.entry(grade.evaluation_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Inserts or replaces the grade for (evaluation, student).
    pub async fn upsert(
        &self,
        evaluation_id: Uuid,
        student_id: Uuid,
        value: f64,
        feedback: Option<String>,
    ) -> Result<entity::grade::Model, DbErr> {
        entity::prelude::Grade::insert(entity::grade::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            evaluation_id: ActiveValue::Set(evaluation_id),
            student_vinculo_id: ActiveValue::Set(student_id),
            value: ActiveValue::Set(value),
            feedback: ActiveValue::Set(feedback),
        })
        .on_conflict(
            OnConflict::columns([
                entity::grade::Column::EvaluationId,
                entity::grade::Column::StudentVinculoId,
            ])
            .update_columns([entity::grade::Column::Value, entity::grade::Column::Feedback])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
