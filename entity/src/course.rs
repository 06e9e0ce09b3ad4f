use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub school_id: Uuid,
    pub name: String,
    pub level: Option<String>,
    pub year: i32,
    /// Vinculo of the course's head teacher (profesor jefe), if assigned.
    pub head_teacher_vinculo_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school::Entity",
        from = "Column::SchoolId",
        to = "super::school::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    School,
    #[sea_orm(
        belongs_to = "super::vinculo::Entity",
        from = "Column::HeadTeacherVinculoId",
        to = "super::vinculo::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    HeadTeacher,
    #[sea_orm(has_many = "super::course_subject::Entity")]
    CourseSubject,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::course_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSubject.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
