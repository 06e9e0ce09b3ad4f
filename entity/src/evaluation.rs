use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_subject_id: Uuid,
    pub name: String,
    pub date: Date,
    /// Evaluation type; `solemne` and `coef2` count double in averages.
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_subject::Entity",
        from = "Column::CourseSubjectId",
        to = "super::course_subject::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CourseSubject,
    #[sea_orm(has_many = "super::grade::Entity")]
    Grade,
}

impl Related<super::course_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSubject.def()
    }
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
