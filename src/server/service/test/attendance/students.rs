use super::*;

/// Tests the attendance roster for a teacher of the course.
///
/// Expected: Ok with the enrolled student
#[tokio::test]
async fn lists_roster_for_course_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;

    let roster = AttendanceService::new(db)
        .students(setup.teacher.id, setup.course.id, setup.course.year)
        .await?;

    assert_eq!(roster.count, 1);
    assert_eq!(roster.students[0].alumno_vinculo_id, student.id);

    Ok(())
}

/// Tests the attendance roster for a teacher unrelated to the course.
///
/// Verifies that the roster is hidden rather than rejected.
///
/// Expected: Ok with an empty roster
#[tokio::test]
async fn returns_empty_roster_without_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let outsider = factory::helpers::create_teacher(db, setup.school.id).await?;

    let roster = AttendanceService::new(db)
        .students(outsider.id, setup.course.id, setup.course.year)
        .await?;

    assert_eq!(roster.count, 0);
    assert!(roster.students.is_empty());

    Ok(())
}
