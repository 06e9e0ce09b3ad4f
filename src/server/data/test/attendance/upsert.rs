use super::*;

/// Tests recording attendance for a student without a previous record.
///
/// Verifies that the repository inserts a new row with the status, recorder
/// and both timestamps set to the given instant.
///
/// Expected: Ok with one record created
#[tokio::test]
async fn creates_record_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let now = Utc.with_ymd_and_hms(2025, 3, 3, 8, 15, 0).unwrap();

    let record = AttendanceRepository::new(db)
        .upsert(
            setup.course.id,
            student.id,
            day(3),
            AttendanceStatus::Absent,
            setup.teacher.id,
            now,
        )
        .await?;

    assert_eq!(record.status, "ausente");
    assert_eq!(record.recorded_by_vinculo_id, setup.teacher.id);
    assert_eq!(record.created_at, now);
    assert_eq!(record.updated_at, now);

    let count = entity::prelude::DailyAttendance::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests recording attendance twice for the same student and day.
///
/// Verifies that the second call overwrites status and `updated_at` while
/// keeping the original `created_at` and not inserting a duplicate row.
///
/// Expected: Ok with a single updated record
#[tokio::test]
async fn updates_existing_record_keeping_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let first = Utc.with_ymd_and_hms(2025, 3, 3, 8, 15, 0).unwrap();
    let second = first + Duration::hours(2);

    let repo = AttendanceRepository::new(db);
    repo.upsert(
        setup.course.id,
        student.id,
        day(3),
        AttendanceStatus::Absent,
        setup.teacher.id,
        first,
    )
    .await?;
    let updated = repo
        .upsert(
            setup.course.id,
            student.id,
            day(3),
            AttendanceStatus::Late,
            setup.teacher.id,
            second,
        )
        .await?;

    assert_eq!(updated.status, "tardanza");
    assert_eq!(updated.created_at, first);
    assert_eq!(updated.updated_at, second);

    let count = entity::prelude::DailyAttendance::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests recording attendance inside a transaction that is committed.
///
/// Verifies that the repository works on a transaction handle as well as the
/// pool.
///
/// Expected: Ok with the record visible after commit
#[tokio::test]
async fn writes_through_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;

    let txn = db.begin().await?;
    AttendanceRepository::new(&txn)
        .upsert(
            setup.course.id,
            student.id,
            day(4),
            AttendanceStatus::Present,
            setup.teacher.id,
            Utc::now(),
        )
        .await?;
    txn.commit().await?;

    let records = AttendanceRepository::new(db)
        .get_by_course_and_date(setup.course.id, day(4))
        .await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, "presente");

    Ok(())
}

/// Tests recording the same student's day twice at once.
///
/// Expected: Ok for both writes with exactly one record for the day
#[tokio::test]
async fn concurrent_records_keep_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let now = Utc.with_ymd_and_hms(2025, 3, 5, 8, 15, 0).unwrap();

    let repo = AttendanceRepository::new(db);
    let (first, second) = tokio::join!(
        repo.upsert(
            setup.course.id,
            student.id,
            day(5),
            AttendanceStatus::Present,
            setup.teacher.id,
            now,
        ),
        repo.upsert(
            setup.course.id,
            student.id,
            day(5),
            AttendanceStatus::Absent,
            setup.teacher.id,
            now,
        ),
    );
    first?;
    second?;

    let records = repo.get_by_course_and_date(setup.course.id, day(5)).await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].created_at, now);

    Ok(())
}
