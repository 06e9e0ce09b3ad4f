use super::*;

/// Tests reading a day's attendance for a partially taken roster.
///
/// Verifies that students without a record are reported as `no_registrado`.
///
/// Expected: Ok with one marked and one unregistered student
#[tokio::test]
async fn reports_unregistered_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let marked = factory::helpers::create_named_student(db, setup.school.id, "Ana", "Alvarez")
        .await?;
    let unmarked = factory::helpers::create_named_student(db, setup.school.id, "Beto", "Bravo")
        .await?;
    for student in [&marked, &unmarked] {
        factory::create_enrollment(db, student.id, setup.course.id, setup.course.year).await?;
    }
    let date = school_day(&setup.course);
    factory::attendance::create_attendance(
        db,
        setup.course.id,
        marked.id,
        date,
        "presente",
        setup.teacher.id,
    )
    .await?;

    let day = AttendanceService::new(db).day(setup.course.id, date).await?;

    assert_eq!(day.count, 2);
    assert_eq!(day.students[0].alumno_vinculo_id, marked.id);
    assert_eq!(day.students[0].estado, AttendanceMarkDto::Presente);
    assert_eq!(day.students[1].estado, AttendanceMarkDto::NoRegistrado);

    Ok(())
}
