use crate::server::{error::AppError, service::schedule::ScheduleService};
use test_utils::{
    builder::TestBuilder,
    factory::{self, schedule::ScheduleFactory},
};

/// Tests grouping the timetable by weekday.
///
/// Verifies that weekend slots are left out of the Monday to Friday view.
///
/// Expected: Ok with one Monday and one Wednesday slot
#[tokio::test]
async fn groups_week_by_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let cs = setup.course_subject.id;
    let monday = ScheduleFactory::new(db, cs).weekday(1).build().await?;
    ScheduleFactory::new(db, cs).weekday(3).times(10, 0, 11, 30).build().await?;
    ScheduleFactory::new(db, cs).weekday(6).build().await?;

    let week = ScheduleService::new(db).week(setup.teacher.id).await?;

    assert_eq!(week.monday.len(), 1);
    assert_eq!(week.monday[0].horario_id, monday.id);
    assert_eq!(week.monday[0].start_time, "08:00:00");
    assert_eq!(week.wednesday.len(), 1);
    assert!(week.tuesday.is_empty() && week.thursday.is_empty() && week.friday.is_empty());

    Ok(())
}

/// Tests timetable totals.
///
/// Expected: Ok with slot, hour, course and room totals
#[tokio::test]
async fn computes_totals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let room = factory::room::create_room(db, setup.school.id).await?;
    let cs = setup.course_subject.id;
    ScheduleFactory::new(db, cs).weekday(1).room(room.id).build().await?;
    ScheduleFactory::new(db, cs)
        .weekday(2)
        .times(9, 0, 10, 30)
        .room(room.id)
        .build()
        .await?;
    ScheduleFactory::new(db, cs).weekday(4).active(false).build().await?;

    let stats = ScheduleService::new(db).stats(setup.teacher.id).await?;

    assert_eq!(stats.total_horarios, 2);
    assert_eq!(stats.weekly_hours, 2.5);
    assert_eq!(stats.distinct_courses, 1);
    assert_eq!(stats.sala_count, 1);

    Ok(())
}

/// Tests weekly hours over a slot that is not a whole number of hours.
///
/// Expected: Ok with the unrounded sum of slot lengths
#[tokio::test]
async fn weekly_hours_are_not_rounded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    ScheduleFactory::new(db, setup.course_subject.id)
        .weekday(1)
        .times(9, 0, 9, 50)
        .build()
        .await?;

    let stats = ScheduleService::new(db).stats(setup.teacher.id).await?;

    assert_eq!(stats.weekly_hours, 50.0 / 60.0);

    Ok(())
}
