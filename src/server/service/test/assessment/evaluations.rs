use super::*;

/// Tests listing the evaluations of a course subject.
///
/// Verifies that evaluations come newest first and carry the number of graded
/// students next to the course's enrolment count.
///
/// Expected: Ok with two evaluations, the later one first
#[tokio::test]
async fn lists_newest_first_with_graded_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let first = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let second = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    factory::helpers::create_enrolled_student(db, &setup.course).await?;

    let cs = setup.course_subject.id;
    let older = EvaluationFactory::new(db, cs)
        .name("Prueba 1")
        .date(NaiveDate::from_ymd_opt(2025, 4, 7).unwrap())
        .build()
        .await?;
    let newer = EvaluationFactory::new(db, cs)
        .name("Prueba 2")
        .date(NaiveDate::from_ymd_opt(2025, 5, 19).unwrap())
        .build()
        .await?;
    factory::create_grade(db, older.id, first.id, 5.0).await?;
    factory::create_grade(db, older.id, second.id, 4.2).await?;

    let evaluations = AssessmentService::new(db)
        .evaluations(setup.course.id, setup.subject.id)
        .await?;

    assert_eq!(evaluations.len(), 2);
    assert_eq!(evaluations[0].evaluation_id, newer.id);
    assert_eq!(evaluations[0].graded_count, 0);
    assert_eq!(evaluations[1].evaluation_id, older.id);
    assert_eq!(evaluations[1].graded_count, 2);
    assert!(evaluations.iter().all(|e| e.total_students == 3));

    Ok(())
}

/// Tests listing evaluations for a subject the course does not offer.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_course_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let other_subject = factory::create_subject(db, setup.school.id).await?;

    let result = AssessmentService::new(db)
        .evaluations(setup.course.id, other_subject.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
