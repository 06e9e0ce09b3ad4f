use super::*;

/// Tests fetching a course roster.
///
/// Verifies that students are ordered by paternal surname, then first name,
/// ignoring case, and carry their full name.
///
/// Expected: Ok with students in display order
#[tokio::test]
async fn returns_students_sorted_by_surname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let year = setup.course.year;

    let zuniga = factory::helpers::create_named_student(db, setup.school.id, "Bea", "Zúñiga").await?;
    let ana = factory::helpers::create_named_student(db, setup.school.id, "Ana", "rojas").await?;
    let carla = factory::helpers::create_named_student(db, setup.school.id, "Carla", "Rojas").await?;
    for student in [&zuniga, &ana, &carla] {
        factory::create_enrollment(db, student.id, setup.course.id, year).await?;
    }

    let students = EnrollmentRepository::new(db)
        .get_students(setup.course.id, year)
        .await?;

    let ids: Vec<_> = students.iter().map(|s| s.vinculo_id).collect();
    assert_eq!(ids, vec![ana.id, carla.id, zuniga.id]);
    assert_eq!(students[0].full_name.as_deref(), Some("Ana rojas"));

    Ok(())
}

/// Tests fetching a roster for a year with no enrollments.
///
/// Expected: Ok with empty Vec and a zero count
#[tokio::test]
async fn returns_empty_for_other_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    factory::helpers::create_enrolled_student(db, &setup.course).await?;

    let repo = EnrollmentRepository::new(db);
    let year = setup.course.year + 1;

    assert!(repo.get_students(setup.course.id, year).await?.is_empty());
    assert_eq!(repo.count_students(setup.course.id, year).await?, 0);

    Ok(())
}
