use sea_orm::entity::prelude::*;

/// Behavioural note written by a teacher about a student.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "observations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_vinculo_id: Uuid,
    pub teacher_vinculo_id: Uuid,
    pub course_id: Uuid,
    pub course_subject_id: Option<Uuid>,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// `positiva`, `negativa` or `informativa`.
    pub kind: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vinculo::Entity",
        from = "Column::StudentVinculoId",
        to = "super::vinculo::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::vinculo::Entity",
        from = "Column::TeacherVinculoId",
        to = "super::vinculo::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::course_subject::Entity",
        from = "Column::CourseSubjectId",
        to = "super::course_subject::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CourseSubject,
}

impl ActiveModelBehavior for ActiveModel {}
