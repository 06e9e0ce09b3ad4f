use super::*;

/// Tests creating an evaluation for a course with students.
///
/// Verifies that the evaluation defaults to `prueba` and that one `evaluacion`
/// notification reaches every enrolled student.
///
/// Expected: Ok with the evaluation and one notification with two recipients
#[tokio::test]
async fn creates_evaluation_and_notifies_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    factory::helpers::create_enrolled_student(db, &setup.course).await?;
    factory::helpers::create_enrolled_student(db, &setup.course).await?;

    let evaluation = AssessmentService::new(db)
        .create_evaluation(
            setup.teacher.id,
            setup.course.id,
            setup.subject.id,
            evaluation_payload("Prueba 1", "2025-05-12"),
            Utc::now(),
        )
        .await?;

    assert_eq!(evaluation.name, "Prueba 1");
    assert_eq!(evaluation.tipo, "prueba");
    assert_eq!(evaluation.date, NaiveDate::from_ymd_opt(2025, 5, 12).unwrap());
    assert_eq!(evaluation.total_students, 2);
    assert_eq!(evaluation.graded_count, 0);

    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "evaluacion");
    assert_eq!(notifications[0].evaluation_id, Some(evaluation.evaluation_id));
    let description = notifications[0].description.clone().unwrap_or_default();
    assert!(description.contains("'Prueba 1'"));
    assert!(description.contains(&setup.course.name));
    assert_eq!(entity::prelude::NotificationRecipient::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating an evaluation for a course without students.
///
/// Expected: Ok with no notification written
#[tokio::test]
async fn skips_notification_for_empty_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;

    let evaluation = AssessmentService::new(db)
        .create_evaluation(
            setup.teacher.id,
            setup.course.id,
            setup.subject.id,
            evaluation_payload("Control", "2025-05-12"),
            Utc::now(),
        )
        .await?;

    assert_eq!(evaluation.total_students, 0);
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating an evaluation as a teacher unrelated to the course.
///
/// Expected: Err(AccessDenied) and no evaluation stored
#[tokio::test]
async fn denies_teacher_without_course_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let outsider = factory::helpers::create_teacher(db, setup.school.id).await?;

    let result = AssessmentService::new(db)
        .create_evaluation(
            outsider.id,
            setup.course.id,
            setup.subject.id,
            evaluation_payload("Prueba 1", "2025-05-12"),
            Utc::now(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(entity::prelude::Evaluation::find().count(db).await?, 0);

    Ok(())
}

/// Tests validation order when the payload is incomplete and the subject unknown.
///
/// Verifies that missing fields are reported before the lookup fails.
///
/// Expected: Err(BadRequest) for a missing name, Err(NotFound) for an unknown subject
#[tokio::test]
async fn validates_payload_before_lookup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let unknown_subject = factory::create_subject(db, setup.school.id).await?;
    let service = AssessmentService::new(db);

    let missing_name = service
        .create_evaluation(
            setup.teacher.id,
            setup.course.id,
            unknown_subject.id,
            CreateEvaluationDto {
                name: Some(" ".to_string()),
                tipo: None,
                fecha: Some("2025-05-12".to_string()),
            },
            Utc::now(),
        )
        .await;
    assert!(matches!(missing_name, Err(AppError::BadRequest(_))));

    let unknown = service
        .create_evaluation(
            setup.teacher.id,
            setup.course.id,
            unknown_subject.id,
            evaluation_payload("Prueba 1", "2025-05-12"),
            Utc::now(),
        )
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    Ok(())
}
