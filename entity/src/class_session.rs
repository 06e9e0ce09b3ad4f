use sea_orm::entity::prelude::*;

/// A single held class of a course subject.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "class_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_subject_id: Uuid,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub topic: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
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
}

impl Related<super::course_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSubject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
