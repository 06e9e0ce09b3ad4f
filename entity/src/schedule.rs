use sea_orm::entity::prelude::*;

/// Recurring weekly timetable slot for a course subject.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_subject_id: Uuid,
    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub weekday: i32,
    pub start_time: Time,
    pub end_time: Time,
    pub room_id: Option<Uuid>,
    pub valid_from: Option<Date>,
    pub valid_until: Option<Date>,
    pub active: bool,
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
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Room,
}

impl Related<super::course_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSubject.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
