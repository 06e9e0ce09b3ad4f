use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    model::filter::{
        AdminFilterDto, AdminFilterListDto, CourseFilterDto, CourseFilterListDto,
        CourseSubjectFilterListDto, StudentFilterListDto, SubjectFilterListDto,
    },
    server::{
        data::{
            course::CourseRepository, course_subject::CourseSubjectRepository,
            enrollment::EnrollmentRepository, vinculo::VinculoRepository,
        },
        error::AppError,
        model::{course_subject::CourseSubjectDetail, student::Student},
        service::assessment::AssessmentService,
        util::name::full_name,
    },
};

pub struct FilterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the teacher's distinct (course, subject) pairs, newest year first
    pub async fn course_subjects(
        &self,
        teacher_id: Uuid,
    ) -> Result<CourseSubjectFilterListDto, AppError> {
        let mut details = CourseSubjectRepository::new(self.db)
            .get_details_for_teacher(teacher_id, None)
            .await?;
        details.sort_by(|a, b| {
            b.course
                .year
                .cmp(&a.course.year)
                .then_with(|| a.course.name.cmp(&b.course.name))
                .then_with(|| a.subject.name.cmp(&b.subject.name))
        });

        let mut seen = HashSet::new();
        let items: Vec<_> = details
            .into_iter()
            .filter(|d| seen.insert((d.course.id, d.subject.id)))
            .map(CourseSubjectDetail::into_filter_dto)
            .collect();

        Ok(CourseSubjectFilterListDto {
            count: items.len(),
            items,
        })
    }

    /// Gets courses the teacher teaches in or heads, newest year first, then by name
    pub async fn courses(&self, teacher_id: Uuid) -> Result<CourseFilterListDto, AppError> {
        let mut courses = CourseRepository::new(self.db)
            .get_for_teacher(teacher_id)
            .await?;
        courses.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| a.name.cmp(&b.name)));

        let items: Vec<_> = courses
            .into_iter()
            .map(|c| CourseFilterDto {
                course_id: c.id,
                course_name: c.name,
                year: c.year,
            })
            .collect();

        Ok(CourseFilterListDto {
            count: items.len(),
            items,
        })
    }

    pub async fn subjects(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
    ) -> Result<SubjectFilterListDto, AppError> {
        let items = AssessmentService::new(self.db)
            .course_subjects(teacher_id, course_id)
            .await?;

        Ok(SubjectFilterListDto {
            count: items.len(),
            items,
        })
    }

    pub async fn students(&self, course_id: Uuid, year: i32) -> Result<StudentFilterListDto, AppError> {
        let items: Vec<_> = EnrollmentRepository::new(self.db)
            .get_students(course_id, year)
            .await?
            .into_iter()
            .map(Student::into_filter_dto)
            .collect();

        Ok(StudentFilterListDto {
            count: items.len(),
            items,
        })
    }

    /// Gets the administrators of the teacher's school ordered by surname, then name.
    ///
    /// # Returns
    /// - `Ok(AdminFilterListDto)` - Administrators, possibly none
    /// - `Err(AppError::NotFound)` - Teacher vinculo does not exist
    pub async fn admins(&self, teacher_id: Uuid) -> Result<AdminFilterListDto, AppError> {
        let vinculo_repo = VinculoRepository::new(self.db);

        let teacher = vinculo_repo
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vínculo institucional no encontrado".to_string()))?;

        let mut admins = vinculo_repo.get_school_admins(teacher.school_id).await?;
        admins.sort_by(|(_, a, _), (_, b, _)| {
            let surname = |p: &entity::person::Model| {
                p.paternal_surname.clone().unwrap_or_default().to_lowercase()
            };
            surname(a)
                .cmp(&surname(b))
                .then_with(|| a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()))
        });

        let items: Vec<_> = admins
            .into_iter()
            .map(|(vinculo, person, contact)| AdminFilterDto {
                vinculo_id: vinculo.id,
                colegio_id: vinculo.school_id,
                rut: person.rut.clone(),
                nombre_completo: full_name(&person),
                email: vinculo
                    .institutional_email
                    .or_else(|| contact.and_then(|c| c.email)),
            })
            .collect();

        Ok(AdminFilterListDto {
            count: items.len(),
            items,
        })
    }
}
