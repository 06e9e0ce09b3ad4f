use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    model::home::{
        DayScheduleItemDto, LastClassDto, SchoolRefDto, SubjectCourseStatsDto, SubjectStatsDto,
        TeacherOverviewDto, TeacherProfileDto, TeacherSubjectDto,
    },
    server::{
        data::{
            attendance::AttendanceRepository, class_session::ClassSessionRepository,
            course::CourseRepository, course_subject::CourseSubjectRepository,
            enrollment::EnrollmentRepository, evaluation::EvaluationRepository,
            grade::GradeRepository, schedule::ScheduleRepository, subject::SubjectRepository,
            vinculo::VinculoRepository,
        },
        error::AppError,
        middleware::token::TokenClaims,
        model::{attendance::AttendanceStatus, schedule::ScheduleSlot},
        service::grading,
        util::{date::format_time, name::full_name},
    },
};

pub struct HomeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HomeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the teacher's classes on a date, ordered by start time.
    pub async fn day_schedule(
        &self,
        teacher_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<DayScheduleItemDto>, AppError> {
        let slots = ScheduleRepository::new(self.db)
            .get_active_for_teacher(teacher_id, Some(date))
            .await?;

        Ok(slots.into_iter().map(ScheduleSlot::into_day_dto).collect())
    }

    /// Builds the caller's profile from token claims.
    ///
    /// The person is `personaId`, falling back to `sub`. Person, school and vinculo are
    /// looked up best-effort; identifiers that are not UUIDs leave those parts empty.
    pub async fn profile(&self, claims: &TokenClaims) -> Result<TeacherProfileDto, AppError> {
        let vinculo_repo = VinculoRepository::new(self.db);

        let persona_id = claims.persona_id.clone().or_else(|| claims.sub.clone());
        let person_uuid = persona_id.as_deref().and_then(|id| Uuid::parse_str(id).ok());
        let school_uuid = claims
            .colegio_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok());

        let person = match person_uuid {
            Some(id) => vinculo_repo.find_person_with_contact(id).await?,
            None => None,
        };
        let school = match school_uuid {
            Some(id) => vinculo_repo.find_school(id).await?,
            None => None,
        };
        let vinculo = match (person_uuid, school_uuid) {
            (Some(person_id), Some(school_id)) => {
                vinculo_repo
                    .find_by_person_and_school(person_id, school_id)
                    .await?
            }
            _ => None,
        };

        let contact_email = person
            .as_ref()
            .and_then(|(_, contact)| contact.as_ref())
            .and_then(|c| c.email.clone());
        let email = vinculo
            .and_then(|v| v.institutional_email)
            .or(contact_email);

        Ok(TeacherProfileDto {
            persona_id,
            user_id: claims.sub.clone(),
            rol: claims.rol.clone(),
            colegio_id: claims.colegio_id.clone(),
            nombre: person.as_ref().and_then(|(p, _)| full_name(p)),
            email,
            colegio: school.map(|s| SchoolRefDto {
                id: s.id,
                nombre: s.name,
            }),
        })
    }

    /// Gets the distinct (course, subject) pairs the teacher teaches.
    ///
    /// Falls back to the teacher's qualified subjects, without a course, when nothing
    /// is assigned.
    pub async fn subjects(&self, teacher_id: Uuid) -> Result<Vec<TeacherSubjectDto>, AppError> {
        let subjects = self.assigned_subjects(teacher_id, None).await?;
        if !subjects.is_empty() {
            return Ok(subjects);
        }

        let qualified = SubjectRepository::new(self.db)
            .get_qualified_for(teacher_id)
            .await?;

        Ok(qualified
            .into_iter()
            .map(|s| TeacherSubjectDto {
                course_id: None,
                course_name: String::new(),
                subject_id: s.id,
                subject_name: s.name,
            })
            .collect())
    }

    /// Gets enrollment, attendance and grade statistics for a subject in a course.
    ///
    /// # Returns
    /// - `Ok(SubjectStatsDto)` - Statistics over the course subject
    /// - `Err(AppError::NotFound)` - No such course subject
    /// - `Err(AppError::InternalError)` - Course subject points at a missing course
    pub async fn subject_stats(
        &self,
        course_id: Uuid,
        subject_id: Uuid,
    ) -> Result<SubjectStatsDto, AppError> {
        let course_subject = CourseSubjectRepository::new(self.db)
            .find_by_course_and_subject(course_id, subject_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Curso-materia no encontrado".to_string()))?;
        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "course subject {} references missing course {}",
                    course_subject.id, course_id
                ))
            })?;

        let students_count = EnrollmentRepository::new(self.db)
            .count_students(course.id, course.year)
            .await?;

        let records = AttendanceRepository::new(self.db)
            .get_by_course(course.id)
            .await?;
        let present = records
            .iter()
            .filter(|r| AttendanceStatus::parse(&r.status).ok() == Some(AttendanceStatus::Present))
            .count();
        let attendance_average =
            (!records.is_empty()).then(|| present as f64 / records.len() as f64 * 100.0);

        let evaluation_ids = EvaluationRepository::new(self.db)
            .get_by_course_subject(course_subject.id)
            .await?
            .into_iter()
            .map(|e| e.id)
            .collect();
        let grades = GradeRepository::new(self.db)
            .get_by_evaluations(evaluation_ids)
            .await?;

        let values: Vec<f64> = grades.iter().map(|g| g.value).collect();
        let student_averages = grading::simple_student_averages(&grades);

        Ok(SubjectStatsDto {
            subject_id,
            course_id,
            students_count,
            attendance_average,
            subject_average: grading::simple_average(&values),
            distribution: grading::distribution(student_averages.values()),
            approved_count: grading::count_approved(student_averages.values()),
        })
    }

    /// Gets the teacher's subjects and most recent class.
    ///
    /// With a course filter only that course's subjects are listed and the qualified
    /// subject fallback does not apply. The last class is omitted when the fallback is
    /// used.
    pub async fn overview(
        &self,
        teacher_id: Uuid,
        course_id: Option<Uuid>,
    ) -> Result<TeacherOverviewDto, AppError> {
        let subjects = match course_id {
            Some(course_id) => self.assigned_subjects(teacher_id, Some(course_id)).await?,
            None => self.subjects(teacher_id).await?,
        };
        let uses_fallback = subjects.iter().any(|s| s.course_id.is_none());

        let last_class = if uses_fallback {
            None
        } else {
            ClassSessionRepository::new(self.db)
                .find_latest_for_teacher(teacher_id, course_id)
                .await?
                .map(|(session, detail)| LastClassDto {
                    class_id: session.id,
                    date: session.date,
                    course_id: detail.course.id,
                    course_name: detail.course.name,
                    subject_id: detail.subject.id,
                    subject_name: detail.subject.name,
                    start_time: format_time(session.start_time),
                    end_time: format_time(session.end_time),
                    topic: session.topic,
                    observations: session.notes,
                })
        };

        Ok(TeacherOverviewDto {
            vinculo_id: teacher_id,
            subjects,
            last_class,
        })
    }

    /// Gets subject statistics for every course in which the teacher teaches the subject.
    ///
    /// Courses whose statistics fail to compute are skipped.
    pub async fn subject_stats_by_course(
        &self,
        teacher_id: Uuid,
        subject_id: Uuid,
    ) -> Result<Vec<SubjectCourseStatsDto>, AppError> {
        let courses: Vec<(Uuid, String)> = self
            .assigned_subjects(teacher_id, None)
            .await?
            .into_iter()
            .filter(|s| s.subject_id == subject_id)
            .filter_map(|s| s.course_id.map(|id| (id, s.course_name)))
            .collect();

        let mut result = Vec::new();
        for (course_id, course_name) in courses {
            match self.subject_stats(course_id, subject_id).await {
                Ok(stats) => result.push(SubjectCourseStatsDto { course_name, stats }),
                Err(e) => {
                    tracing::warn!(
                        "Skipping stats for subject {} in course {}: {}",
                        subject_id,
                        course_id,
                        e
                    );
                }
            }
        }

        Ok(result)
    }

    /// Distinct (course, subject) pairs ordered by course name, then subject name.
    async fn assigned_subjects(
        &self,
        teacher_id: Uuid,
        course_id: Option<Uuid>,
    ) -> Result<Vec<TeacherSubjectDto>, AppError> {
        let details = CourseSubjectRepository::new(self.db)
            .get_details_for_teacher(teacher_id, course_id)
            .await?;

        let mut seen = HashSet::new();
        let mut subjects: Vec<TeacherSubjectDto> = details
            .iter()
            .filter(|d| seen.insert((d.course.id, d.subject.id)))
            .map(|d| d.to_subject_dto())
            .collect();
        subjects.sort_by(|a, b| {
            a.course_name
                .cmp(&b.course_name)
                .then_with(|| a.subject_name.cmp(&b.subject_name))
        });

        Ok(subjects)
    }
}

