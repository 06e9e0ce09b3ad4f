use super::*;

/// Tests fetching courses for a teacher who both teaches and heads courses.
///
/// Verifies that a course the teacher teaches in and also heads appears once,
/// and that a course only headed is included.
///
/// Expected: Ok with two distinct courses
#[tokio::test]
async fn merges_taught_and_headed_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_head_class_setup(db).await?;
    let headed_only = CourseFactory::new(db, setup.school.id)
        .head_teacher(setup.teacher.id)
        .build()
        .await?;

    let mut ids: Vec<_> = CourseRepository::new(db)
        .get_for_teacher(setup.teacher.id)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    ids.sort();

    let mut expected = vec![setup.course.id, headed_only.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests fetching courses for a teacher with no assignments.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_unassigned_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let other = factory::helpers::create_teacher(db, setup.school.id).await?;

    let courses = CourseRepository::new(db).get_for_teacher(other.id).await?;

    assert!(courses.is_empty());

    Ok(())
}
