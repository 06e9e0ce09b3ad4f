use super::*;

/// Tests the head teacher check for the course's head teacher.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_head_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_head_class_setup(db).await?;

    let result = CourseRepository::new(db)
        .is_head_teacher(setup.teacher.id, setup.course.id)
        .await?;

    assert!(result);

    Ok(())
}

/// Tests the head teacher check for a teacher who only teaches in the course.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_subject_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;

    let result = CourseRepository::new(db)
        .is_head_teacher(setup.teacher.id, setup.course.id)
        .await?;

    assert!(!result);

    Ok(())
}
