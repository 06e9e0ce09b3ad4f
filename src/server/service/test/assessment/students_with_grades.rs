use super::*;

/// Tests the grade book of a subject.
///
/// Verifies that only the three newest grades are listed, the rest are summarized
/// as `"{n}+"`, and `solemne` evaluations weigh double in the average.
///
/// Expected: Ok with the weighted average and standing
#[tokio::test]
async fn lists_recent_grades_with_weighted_average() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let cs = setup.course_subject.id;

    let mut evaluations = Vec::new();
    for (day, kind) in [(1, "prueba"), (2, "prueba"), (3, "prueba"), (4, "solemne")] {
        evaluations.push(
            EvaluationFactory::new(db, cs)
                .kind(kind)
                .date(NaiveDate::from_ymd_opt(2025, 4, day).unwrap())
                .build()
                .await?,
        );
    }
    for (evaluation, value) in evaluations.iter().zip([4.0, 5.0, 6.0, 7.0]) {
        factory::create_grade(db, evaluation.id, student.id, value).await?;
    }

    let book = AssessmentService::new(db)
        .students_with_grades(setup.course.id, setup.subject.id)
        .await?;

    assert_eq!(book.total_evaluations, 4);
    assert_eq!(book.count, 1);
    let row = &book.students[0];
    assert_eq!(row.recent_evaluations.len(), 3);
    assert_eq!(row.recent_evaluations[0].evaluation_id, evaluations[3].id);
    assert_eq!(row.more.as_deref(), Some("1+"));
    // (4 + 5 + 6 + 7 * 2) / 5
    assert_eq!(row.promedio, Some(5.8));
    assert_eq!(row.estado, GradeStanding::Bueno);

    Ok(())
}

/// Tests the grade book for a student with no grades.
///
/// Expected: Ok with no average and `insuficiente` standing
#[tokio::test]
async fn reports_student_without_grades() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    factory::helpers::create_enrolled_student(db, &setup.course).await?;
    factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;

    let book = AssessmentService::new(db)
        .students_with_grades(setup.course.id, setup.subject.id)
        .await?;

    let row = &book.students[0];
    assert!(row.recent_evaluations.is_empty());
    assert_eq!(row.more.as_deref(), Some("1+"));
    assert_eq!(row.promedio, None);
    assert_eq!(row.estado, GradeStanding::Insuficiente);

    Ok(())
}

/// Tests subject statistics over weighted student averages.
///
/// Expected: Ok with course average, extremes and one approved student
#[tokio::test]
async fn computes_subject_stats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let strong = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let weak = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let evaluation = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;
    factory::create_grade(db, evaluation.id, strong.id, 6.0).await?;
    factory::create_grade(db, evaluation.id, weak.id, 3.0).await?;

    let stats = AssessmentService::new(db)
        .subject_stats(setup.course.id, setup.subject.id)
        .await?;

    assert_eq!(stats.course_average, Some(4.5));
    assert_eq!(stats.highest_student_average, Some(6.0));
    assert_eq!(stats.lowest_student_average, Some(3.0));
    assert_eq!(stats.approved_count, 1);
    assert_eq!(stats.total_evaluations, 1);

    Ok(())
}
