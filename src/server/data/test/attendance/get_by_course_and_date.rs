use super::*;

/// Tests fetching a course's attendance for one day.
///
/// Verifies that records from other days and other courses are excluded.
///
/// Expected: Ok with only the matching day's records
#[tokio::test]
async fn returns_only_records_for_day_and_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let other_course = factory::create_course(db, setup.school.id).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;

    factory::attendance::create_attendance(
        db,
        setup.course.id,
        student.id,
        day(3),
        "presente",
        setup.teacher.id,
    )
    .await?;
    factory::attendance::create_attendance(
        db,
        setup.course.id,
        student.id,
        day(4),
        "ausente",
        setup.teacher.id,
    )
    .await?;
    factory::attendance::create_attendance(
        db,
        other_course.id,
        student.id,
        day(3),
        "ausente",
        setup.teacher.id,
    )
    .await?;

    let records = AttendanceRepository::new(db)
        .get_by_course_and_date(setup.course.id, day(3))
        .await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, "presente");

    Ok(())
}

/// Tests fetching a day with no attendance taken.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_when_not_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;

    let records = AttendanceRepository::new(db)
        .get_by_course_and_date(setup.course.id, day(10))
        .await?;

    assert!(records.is_empty());

    Ok(())
}
