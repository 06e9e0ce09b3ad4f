use super::*;

/// Tests taking attendance with one absent student.
///
/// Verifies that every mark is stored and that only the absent student gets an
/// `asistencia` notification carrying the course name.
///
/// Expected: Ok with two processed marks and one notification
#[tokio::test]
async fn records_marks_and_notifies_absent_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let present = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let absent = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let date = school_day(&setup.course);

    let result = AttendanceService::new(db)
        .take(
            setup.teacher.id,
            setup.course.id,
            TakeAttendanceDto {
                curso_materia_id: Some(setup.course_subject.id),
                fecha: Some(date.to_string()),
                attendances: vec![entry(present.id, "presente"), entry(absent.id, "AUSENTE")],
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(result.processed, 2);
    assert_eq!(result.fecha, date);
    assert_eq!(entity::prelude::DailyAttendance::find().count(db).await?, 2);

    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "asistencia");
    assert_eq!(notifications[0].course_subject_id, Some(setup.course_subject.id));
    let metadata = notifications[0].metadata.clone().unwrap_or_default();
    assert_eq!(metadata["courseName"], setup.course.name.as_str());

    let recipients = entity::prelude::NotificationRecipient::find().all(db).await?;
    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].recipient_vinculo_id, absent.id);

    Ok(())
}

/// Tests taking attendance when one student is not enrolled.
///
/// Verifies that nothing is written when any entry fails validation.
///
/// Expected: Err(NotFound) and no attendance rows
#[tokio::test]
async fn rejects_unenrolled_student_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let enrolled = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let stranger = factory::helpers::create_named_student(db, setup.school.id, "Luis", "Soto")
        .await?;

    let result = AttendanceService::new(db)
        .take(
            setup.teacher.id,
            setup.course.id,
            TakeAttendanceDto {
                curso_materia_id: None,
                fecha: Some(school_day(&setup.course).to_string()),
                attendances: vec![entry(enrolled.id, "presente"), entry(stranger.id, "ausente")],
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg.contains(&stranger.id.to_string())));
    assert_eq!(entity::prelude::DailyAttendance::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 0);

    Ok(())
}

/// Tests taking attendance without a date.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_fecha() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;

    let result = AttendanceService::new(db)
        .take(
            setup.teacher.id,
            setup.course.id,
            TakeAttendanceDto {
                curso_materia_id: None,
                fecha: Some("  ".to_string()),
                attendances: vec![entry(student.id, "presente")],
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests taking attendance with a course subject of another course.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_course_subject_from_other_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let other_course = factory::create_course(db, setup.school.id).await?;
    let student = factory::helpers::create_enrolled_student(db, &other_course).await?;

    let result = AttendanceService::new(db)
        .take(
            setup.teacher.id,
            other_course.id,
            TakeAttendanceDto {
                curso_materia_id: Some(setup.course_subject.id),
                fecha: Some(school_day(&other_course).to_string()),
                attendances: vec![entry(student.id, "presente")],
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests taking attendance with an unknown status.
///
/// Expected: Err(BadRequest) and no attendance rows
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;

    let result = AttendanceService::new(db)
        .take(
            setup.teacher.id,
            setup.course.id,
            TakeAttendanceDto {
                curso_materia_id: None,
                fecha: Some(school_day(&setup.course).to_string()),
                attendances: vec![entry(student.id, "justificado")],
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::DailyAttendance::find().count(db).await?, 0);

    Ok(())
}
