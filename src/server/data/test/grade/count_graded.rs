use super::*;

/// Tests counting graded students per evaluation.
///
/// Verifies that evaluations without grades are absent from the map.
///
/// Expected: Ok with a count for each graded evaluation
#[tokio::test]
async fn counts_grades_per_evaluation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let first = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let second = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let graded = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;
    let ungraded = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;
    factory::create_grade(db, graded.id, first.id, 4.0).await?;
    factory::create_grade(db, graded.id, second.id, 6.0).await?;

    let counts = GradeRepository::new(db)
        .count_graded(vec![graded.id, ungraded.id])
        .await?;

    assert_eq!(counts.get(&graded.id), Some(&2));
    assert!(!counts.contains_key(&ungraded.id));

    Ok(())
}

/// Tests counting with no evaluations.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_for_no_evaluations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let counts = GradeRepository::new(db).count_graded(Vec::new()).await?;

    assert!(counts.is_empty());

    Ok(())
}
