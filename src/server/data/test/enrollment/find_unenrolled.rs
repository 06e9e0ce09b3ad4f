use super::*;

/// Tests finding students missing from a course's roster.
///
/// Verifies that enrolled students are filtered out and that a student
/// enrolled for a different year counts as unenrolled.
///
/// Expected: Ok with only the students not enrolled for the year
#[tokio::test]
async fn returns_students_not_enrolled_for_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let enrolled = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let last_year = factory::helpers::create_named_student(db, setup.school.id, "Ana", "Rojas")
        .await?;
    factory::create_enrollment(db, last_year.id, setup.course.id, setup.course.year - 1).await?;

    let missing = EnrollmentRepository::new(db)
        .find_unenrolled(setup.course.id, setup.course.year, &[enrolled.id, last_year.id])
        .await?;

    assert_eq!(missing, vec![last_year.id]);

    Ok(())
}

/// Tests the single-student enrollment check.
///
/// Expected: Ok(true) for the enrolled student
#[tokio::test]
async fn is_enrolled_for_roster_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;

    let result = EnrollmentRepository::new(db)
        .is_enrolled(student.id, setup.course.id, setup.course.year)
        .await?;

    assert!(result);

    Ok(())
}
