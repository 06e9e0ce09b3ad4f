use super::*;

/// Tests correcting an existing mark.
///
/// Verifies that the stored status changes and no notification is sent.
///
/// Expected: Ok with one processed mark
#[tokio::test]
async fn overwrites_existing_mark() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let date = school_day(&setup.course);
    factory::attendance::create_attendance(
        db,
        setup.course.id,
        student.id,
        date,
        "ausente",
        setup.teacher.id,
    )
    .await?;

    let result = AttendanceService::new(db)
        .update(
            setup.teacher.id,
            setup.course.id,
            date,
            vec![entry(student.id, "tardanza")],
            Utc::now(),
        )
        .await?;

    assert_eq!(result.processed, 1);

    let record = entity::prelude::DailyAttendance::find()
        .filter(entity::daily_attendance::Column::StudentVinculoId.eq(student.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(record.status, "tardanza");
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating with no entries.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_updates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;

    let result = AttendanceService::new(db)
        .update(
            setup.teacher.id,
            setup.course.id,
            school_day(&setup.course),
            Vec::new(),
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
