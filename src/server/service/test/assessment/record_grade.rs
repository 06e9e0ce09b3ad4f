use super::*;

/// Tests grading an enrolled student.
///
/// Verifies that `calificacion` is accepted in place of `nota`.
///
/// Expected: Ok with the grade stored
#[tokio::test]
async fn records_grade_from_calificacion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let evaluation = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;

    let grade = AssessmentService::new(db)
        .record_grade(
            setup.teacher.id,
            evaluation.id,
            GradeInputDto {
                alumno_vinculo_id: Some(student.id),
                nota: None,
                calificacion: Some(5.8),
                retroalimentacion: Some("Mejoró".to_string()),
            },
        )
        .await?;

    assert_eq!(grade.nota, 5.8);
    assert_eq!(grade.alumno_vinculo_id, student.id);
    assert_eq!(grade.retroalimentacion.as_deref(), Some("Mejoró"));

    Ok(())
}

/// Tests grading outside the 1.0 to 7.0 scale.
///
/// Expected: Err(BadRequest) for both bounds
#[tokio::test]
async fn rejects_grade_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let evaluation = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;
    let service = AssessmentService::new(db);

    for nota in [0.9, 7.1] {
        let result = service
            .record_grade(setup.teacher.id, evaluation.id, grade_input(student.id, nota))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
    assert_eq!(entity::prelude::Grade::find().count(db).await?, 0);

    Ok(())
}

/// Tests grading by a teacher who only teaches another subject in the course.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_teacher_of_other_subject() -> Result<(), AppError> {
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
    let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
    let evaluation = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;

    let result = AssessmentService::new(db)
        .record_grade(colleague.id, evaluation.id, grade_input(student.id, 6.0))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests grading a student who is not enrolled in the course.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unenrolled_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let stranger = factory::helpers::create_named_student(db, setup.school.id, "Eva", "Paz").await?;
    let evaluation = factory::evaluation::create_evaluation(db, setup.course_subject.id).await?;

    let result = AssessmentService::new(db)
        .record_grade(setup.teacher.id, evaluation.id, grade_input(stranger.id, 6.0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
