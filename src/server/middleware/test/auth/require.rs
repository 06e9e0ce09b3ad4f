use test_utils::fixture::token::claims_for_vinculo;

use super::*;

/// Tests the course-subject teacher passes course, subject and course-subject checks.
///
/// Expected: Ok(AuthenticatedTeacher)
#[tokio::test]
async fn grants_access_to_subject_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let headers = bearer(&claims_for_vinculo(setup.teacher.id));
    let verifier = verifier();

    let teacher = AuthGuard::new(db, &verifier, &headers)
        .require(&[
            Permission::CourseAccess(setup.course.id),
            Permission::SubjectAccess {
                course_id: setup.course.id,
                subject_id: setup.subject.id,
            },
            Permission::CourseSubjectAccess(setup.course_subject.id),
        ])
        .await?;

    assert_eq!(teacher.vinculo_id, setup.teacher.id);

    Ok(())
}

/// Tests the head teacher passes checks for subjects taught by someone else.
///
/// Expected: Ok(AuthenticatedTeacher)
#[tokio::test]
async fn grants_access_to_head_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let head = factory::helpers::create_teacher(db, school.id).await?;
    let other = factory::helpers::create_teacher(db, school.id).await?;
    let course = factory::course::CourseFactory::new(db, school.id)
        .head_teacher(head.id)
        .build()
        .await?;
    let subject = factory::create_subject(db, school.id).await?;
    let course_subject =
        factory::create_course_subject(db, course.id, subject.id, other.id).await?;

    let headers = bearer(&claims_for_vinculo(head.id));
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers)
        .require(&[
            Permission::SubjectAccess {
                course_id: course.id,
                subject_id: subject.id,
            },
            Permission::CourseSubjectAccess(course_subject.id),
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a teacher of another subject in the course lacks subject access.
///
/// Expected: Err(AuthError::AccessDenied) naming the subject
#[tokio::test]
async fn denies_subject_taught_by_someone_else() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let other_subject = factory::create_subject(db, setup.school.id).await?;

    let headers = bearer(&claims_for_vinculo(setup.teacher.id));
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers)
        .require(&[
            Permission::CourseAccess(setup.course.id),
            Permission::SubjectAccess {
                course_id: setup.course.id,
                subject_id: other_subject.id,
            },
        ])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(vinculo_id, message))) => {
            assert_eq!(vinculo_id, setup.teacher.id);
            assert!(message.contains("subject"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a teacher unrelated to the course is denied course access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_unrelated_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let outsider = factory::helpers::create_teacher(db, setup.school.id).await?;

    let headers = bearer(&claims_for_vinculo(outsider.id));
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers)
        .require(&[Permission::CourseAccess(setup.course.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests an empty permission list only authenticates.
///
/// Expected: Ok(AuthenticatedTeacher)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_class_setup(db).await?;
    let headers = bearer(&claims_for_vinculo(setup.teacher.id));
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers).require(&[]).await;

    assert!(result.is_ok());

    Ok(())
}
