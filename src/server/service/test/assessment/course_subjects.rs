use super::*;

/// Tests the subject list for a course the teacher has no assignment in.
///
/// Verifies that the list falls back to the subjects the teacher is qualified
/// for among those the course offers, labelled with the course name.
///
/// Expected: Ok with only the offered qualified subject
#[tokio::test]
async fn falls_back_to_qualified_subjects_offered_by_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let teacher = factory::helpers::create_teacher(db, school.id).await?;
    let colleague = factory::helpers::create_teacher(db, school.id).await?;
    let course = factory::create_course(db, school.id).await?;

    let offered = factory::subject::create_subject_named(db, school.id, "Historia").await?;
    let not_offered = factory::subject::create_subject_named(db, school.id, "Música").await?;
    let unqualified = factory::subject::create_subject_named(db, school.id, "Química").await?;
    factory::create_course_subject(db, course.id, offered.id, colleague.id).await?;
    factory::create_course_subject(db, course.id, unqualified.id, colleague.id).await?;
    factory::teacher_subject::create_teacher_subject(db, teacher.id, offered.id).await?;
    factory::teacher_subject::create_teacher_subject(db, teacher.id, not_offered.id).await?;

    let subjects = AssessmentService::new(db)
        .course_subjects(teacher.id, course.id)
        .await?;

    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].subject_id, offered.id);
    assert_eq!(subjects[0].subject_name, "Historia");
    assert_eq!(subjects[0].course_id, Some(course.id));
    assert_eq!(subjects[0].course_name, course.name);

    Ok(())
}
