use super::*;

/// Tests fetching a teacher's assignments across courses.
///
/// Verifies that each detail carries the course and subject rows of its
/// assignment.
///
/// Expected: Ok with one detail per assignment
#[tokio::test]
async fn returns_assignments_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let second_course = factory::create_course(db, setup.school.id).await?;
    factory::create_course_subject(db, second_course.id, setup.subject.id, setup.teacher.id)
        .await?;

    let details = CourseSubjectRepository::new(db)
        .get_details_for_teacher(setup.teacher.id, None)
        .await?;

    assert_eq!(details.len(), 2);
    for detail in &details {
        assert_eq!(detail.subject.id, setup.subject.id);
        assert_eq!(detail.course.id, detail.course_subject.course_id);
    }

    Ok(())
}

/// Tests restricting assignments to one course.
///
/// Expected: Ok with only the requested course's assignment
#[tokio::test]
async fn filters_by_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let second_course = factory::create_course(db, setup.school.id).await?;
    factory::create_course_subject(db, second_course.id, setup.subject.id, setup.teacher.id)
        .await?;

    let details = CourseSubjectRepository::new(db)
        .get_details_for_teacher(setup.teacher.id, Some(second_course.id))
        .await?;

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].course.id, second_course.id);

    Ok(())
}
