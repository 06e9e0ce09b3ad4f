//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    course::CourseFactory, course_subject::create_course_subject, enrollment::create_enrollment,
    person::PersonFactory, school::create_school, subject::create_subject,
    vinculo::VinculoFactory,
};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Everything needed for a teacher teaching one subject in one course.
pub struct ClassSetup {
    pub school: entity::school::Model,
    pub teacher: entity::vinculo::Model,
    pub course: entity::course::Model,
    pub subject: entity::subject::Model,
    pub course_subject: entity::course_subject::Model,
}

/// Creates a teacher vinculo (role `profesor`) at the given school.
pub async fn create_teacher(
    db: &DatabaseConnection,
    school_id: uuid::Uuid,
) -> Result<entity::vinculo::Model, DbErr> {
    VinculoFactory::new(db, school_id).role("profesor").build().await
}

/// Creates a student vinculo (role `alumno`) with the given names.
pub async fn create_named_student(
    db: &DatabaseConnection,
    school_id: uuid::Uuid,
    first_name: &str,
    paternal_surname: &str,
) -> Result<entity::vinculo::Model, DbErr> {
    let person = PersonFactory::new(db)
        .first_name(first_name)
        .paternal_surname(paternal_surname)
        .build()
        .await?;

    VinculoFactory::new(db, school_id)
        .role("alumno")
        .person_id(person.id)
        .build()
        .await
}

/// Creates a student vinculo enrolled in the course for the course's year.
pub async fn create_enrolled_student(
    db: &DatabaseConnection,
    course: &entity::course::Model,
) -> Result<entity::vinculo::Model, DbErr> {
    let student = VinculoFactory::new(db, course.school_id)
        .role("alumno")
        .build()
        .await?;
    create_enrollment(db, student.id, course.id, course.year).await?;

    Ok(student)
}

/// Creates a school with a teacher teaching one subject in one course.
///
/// The teacher is not the course's head teacher; use `create_head_class_setup`
/// for that.
///
/// # Returns
/// - `Ok(ClassSetup)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_class_setup(db: &DatabaseConnection) -> Result<ClassSetup, DbErr> {
    let school = create_school(db).await?;
    let teacher = create_teacher(db, school.id).await?;
    let course = CourseFactory::new(db, school.id).build().await?;
    let subject = create_subject(db, school.id).await?;
    let course_subject = create_course_subject(db, course.id, subject.id, teacher.id).await?;

    Ok(ClassSetup {
        school,
        teacher,
        course,
        subject,
        course_subject,
    })
}

/// Same as `create_class_setup` but the teacher also heads the course.
pub async fn create_head_class_setup(db: &DatabaseConnection) -> Result<ClassSetup, DbErr> {
    let school = create_school(db).await?;
    let teacher = create_teacher(db, school.id).await?;
    let course = CourseFactory::new(db, school.id)
        .head_teacher(teacher.id)
        .build()
        .await?;
    let subject = create_subject(db, school.id).await?;
    let course_subject = create_course_subject(db, course.id, subject.id, teacher.id).await?;

    Ok(ClassSetup {
        school,
        teacher,
        course,
        subject,
        course_subject,
    })
}
