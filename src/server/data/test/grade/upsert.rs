use super::*;

/// Tests grading a student for the first time.
///
/// Expected: Ok with the grade and feedback stored
#[tokio::test]
async fn creates_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let evaluation = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;

    let grade = GradeRepository::new(db)
        .upsert(evaluation.id, student.id, 5.5, Some("Buen trabajo".to_string()))
        .await?;

    assert_eq!(grade.value, 5.5);
    assert_eq!(grade.feedback.as_deref(), Some("Buen trabajo"));

    Ok(())
}

/// Tests regrading a student.
///
/// Verifies that the existing row is replaced instead of adding a second grade
/// for the same evaluation.
///
/// Expected: Ok with one grade holding the new value
#[tokio::test]
async fn replaces_existing_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let evaluation = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;
    factory::create_grade(db, evaluation.id, student.id, 3.0).await?;

    let grade = GradeRepository::new(db)
        .upsert(evaluation.id, student.id, 6.2, None)
        .await?;

    assert_eq!(grade.value, 6.2);
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 1);

    Ok(())
}

/// Tests grading the same student twice at once.
///
/// Verifies that concurrent writes for one (evaluation, student) pair resolve to
/// a single row holding one of the submitted values.
///
/// Expected: Ok for both writes with exactly one stored grade
#[tokio::test]
async fn concurrent_grades_keep_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let evaluation = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;

    let repo = GradeRepository::new(db);
    let (first, second) = tokio::join!(
        repo.upsert(evaluation.id, student.id, 5.0, None),
        repo.upsert(evaluation.id, student.id, 6.0, None),
    );
    first?;
    second?;

    let grades = repo.get_by_evaluations(vec![evaluation.id]).await?;
    assert_eq!(grades.len(), 1);
    assert!(grades[0].value == 5.0 || grades[0].value == 6.0);

    Ok(())
}
