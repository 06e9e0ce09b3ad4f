use super::*;

/// Tests fetching a teacher's weekly timetable.
///
/// Verifies that inactive slots are skipped and the rest are ordered by
/// weekday, then start time, with room names resolved.
///
/// Expected: Ok with the active slots in order
#[tokio::test]
async fn returns_active_slots_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let room = factory::room::create_room(db, setup.school.id).await?;
    let cs = setup.course_subject.id;

    let tuesday = ScheduleFactory::new(db, cs).weekday(2).build().await?;
    let monday_late = ScheduleFactory::new(db, cs)
        .weekday(1)
        .times(11, 0, 12, 30)
        .build()
        .await?;
    let monday_early = ScheduleFactory::new(db, cs)
        .weekday(1)
        .times(8, 0, 9, 30)
        .room(room.id)
        .build()
        .await?;
    ScheduleFactory::new(db, cs).weekday(3).active(false).build().await?;

    let slots = ScheduleRepository::new(db)
        .get_active_for_teacher(setup.teacher.id, None)
        .await?;

    let ids: Vec<_> = slots.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![monday_early.id, monday_late.id, tuesday.id]);
    assert_eq!(slots[0].room_name.as_deref(), Some(room.name.as_str()));
    assert_eq!(slots[0].subject_name, setup.subject.name);
    assert_eq!(slots[0].hours(), 1.5);

    Ok(())
}

/// Tests fetching the slots for a given date.
///
/// Verifies that only that weekday's slots whose validity window contains the
/// date are returned.
///
/// Expected: Ok with the single valid Monday slot
#[tokio::test]
async fn filters_by_weekday_and_validity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let cs = setup.course_subject.id;
    let date = monday();

    let valid = ScheduleFactory::new(db, cs)
        .weekday(1)
        .valid_between(NaiveDate::from_ymd_opt(2025, 3, 1), None)
        .build()
        .await?;
    ScheduleFactory::new(db, cs)
        .weekday(1)
        .times(10, 0, 11, 0)
        .valid_between(None, NaiveDate::from_ymd_opt(2025, 2, 28))
        .build()
        .await?;
    ScheduleFactory::new(db, cs).weekday(2).build().await?;

    let slots = ScheduleRepository::new(db)
        .get_active_for_teacher(setup.teacher.id, Some(date))
        .await?;

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].id, valid.id);

    Ok(())
}

/// Tests fetching the timetable of a teacher with no assignments.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_without_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let other = factory::helpers::create_teacher(db, setup.school.id).await?;

    let slots = ScheduleRepository::new(db)
        .get_active_for_teacher(other.id, Some(monday()))
        .await?;

    assert!(slots.is_empty());

    Ok(())
}
