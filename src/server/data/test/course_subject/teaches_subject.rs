use super::*;

/// Tests the subject check for the assigned teacher.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_assigned_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;

    let result = CourseSubjectRepository::new(db)
        .teaches_subject(setup.teacher.id, setup.course.id, setup.subject.id)
        .await?;

    assert!(result);

    Ok(())
}

/// Tests the subject check for a subject taught by someone else in the same course.
///
/// Verifies that teaching one subject in a course does not grant another.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_other_subject_in_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let colleague = factory::helpers::create_teacher(db, setup.school.id).await?;
    let other_subject = factory::create_subject(db, setup.school.id).await?;
    factory::create_course_subject(db, setup.course.id, other_subject.id, colleague.id).await?;

    let repo = CourseSubjectRepository::new(db);

    assert!(!repo
        .teaches_subject(setup.teacher.id, setup.course.id, other_subject.id)
        .await?);
    assert!(repo.teaches_in_course(setup.teacher.id, setup.course.id).await?);

    Ok(())
}
