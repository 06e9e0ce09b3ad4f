use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::{
    model::{
        assessment::{
            CourseSubjectOptionDto, CreateEvaluationDto, EvaluationDto, GradeDto, GradeInputDto,
            RecentGradeDto, StudentGradesDto, StudentsWithGradesDto, SubjectGradeStatsDto,
        },
        attendance::RosterDto,
        home::TeacherSubjectDto,
    },
    server::{
        data::{
            course::CourseRepository, course_subject::CourseSubjectRepository,
            enrollment::EnrollmentRepository, evaluation::EvaluationRepository,
            grade::GradeRepository, notification::NotificationRepository,
            subject::SubjectRepository, vinculo::VinculoRepository,
        },
        error::{auth::AuthError, AppError},
        middleware::auth::Permission,
        model::{
            course_subject::CourseSubjectDetail, notification::CreateNotificationParams,
            student::Student,
        },
        service::grading,
        util::{date::parse_date, name::full_name},
    },
};

/// Graded evaluations shown per student before the rest are summarised.
const RECENT_GRADES: usize = 3;

/// Kind stored when an evaluation is created without one.
const DEFAULT_EVALUATION_KIND: &str = "prueba";

pub struct AssessmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssessmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the subjects the teacher teaches in a course, one entry per subject.
    ///
    /// Falls back to the teacher's qualified subjects that the course offers.
    pub async fn course_subjects(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<TeacherSubjectDto>, AppError> {
        let course_subject_repo = CourseSubjectRepository::new(self.db);

        let details = course_subject_repo
            .get_details_for_teacher(teacher_id, Some(course_id))
            .await?;
        let mut seen = HashSet::new();
        let mut subjects: Vec<TeacherSubjectDto> = details
            .iter()
            .filter(|d| seen.insert(d.subject.id))
            .map(CourseSubjectDetail::to_subject_dto)
            .collect();

        if subjects.is_empty() {
            let offered: HashSet<Uuid> = course_subject_repo
                .get_by_course(course_id)
                .await?
                .into_iter()
                .map(|cs| cs.subject_id)
                .collect();
            if offered.is_empty() {
                return Ok(Vec::new());
            }

            let course_name = CourseRepository::new(self.db)
                .find_by_id(course_id)
                .await?
                .map(|c| c.name)
                .unwrap_or_default();

            subjects = SubjectRepository::new(self.db)
                .get_qualified_for(teacher_id)
                .await?
                .into_iter()
                .filter(|s| offered.contains(&s.id))
                .map(|s| TeacherSubjectDto {
                    course_id: Some(course_id),
                    course_name: course_name.clone(),
                    subject_id: s.id,
                    subject_name: s.name,
                })
                .collect();
        }

        subjects.sort_by(|a, b| a.subject_name.cmp(&b.subject_name));
        Ok(subjects)
    }

    /// Gets the teacher's course subjects in a course ordered by subject name
    pub async fn course_subject_options(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<CourseSubjectOptionDto>, AppError> {
        let mut details = CourseSubjectRepository::new(self.db)
            .get_details_for_teacher(teacher_id, Some(course_id))
            .await?;
        details.sort_by(|a, b| a.subject.name.cmp(&b.subject.name));

        Ok(details
            .into_iter()
            .map(CourseSubjectDetail::into_option_dto)
            .collect())
    }

    /// Gets a subject's evaluations newest first with grading progress.
    pub async fn evaluations(
        &self,
        course_id: Uuid,
        subject_id: Uuid,
    ) -> Result<Vec<EvaluationDto>, AppError> {
        let (course_subject, course) = self.find_course_subject(course_id, subject_id).await?;

        let evaluations = EvaluationRepository::new(self.db)
            .get_by_course_subject(course_subject.id)
            .await?;
        let graded = GradeRepository::new(self.db)
            .count_graded(evaluations.iter().map(|e| e.id).collect())
            .await?;
        let total_students = EnrollmentRepository::new(self.db)
            .count_students(course.id, course.year)
            .await?;

        Ok(evaluations
            .into_iter()
            .map(|e| EvaluationDto {
                graded_count: graded.get(&e.id).copied().unwrap_or(0),
                evaluation_id: e.id,
                name: e.name,
                tipo: e.kind,
                date: e.date,
                total_students,
            })
            .collect())
    }

    /// Creates an evaluation and notifies the course's students.
    ///
    /// # Returns
    /// - `Ok(EvaluationDto)` - Created evaluation with nothing graded yet
    /// - `Err(AppError::BadRequest)` - Missing name or fecha, or malformed fecha
    /// - `Err(AppError::NotFound)` - No course subject for the course and subject
    /// - `Err(AuthError::AccessDenied)` - Teacher has no access to the course
    pub async fn create_evaluation(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
        subject_id: Uuid,
        payload: CreateEvaluationDto,
        now: DateTime<Utc>,
    ) -> Result<EvaluationDto, AppError> {
        let name = non_blank(payload.name)
            .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;
        let fecha = non_blank(payload.fecha)
            .ok_or_else(|| AppError::BadRequest("fecha is required".to_string()))?;
        let date = parse_date(&fecha)?;
        let kind = non_blank(payload.tipo).unwrap_or_else(|| DEFAULT_EVALUATION_KIND.to_string());

        let (course_subject, course) = self.find_course_subject(course_id, subject_id).await?;

        if !Permission::CourseAccess(course_id)
            .check(self.db, teacher_id)
            .await?
        {
            return Err(AuthError::AccessDenied(
                teacher_id,
                "Not authorized to create evaluations for this course".to_string(),
            )
            .into());
        }

        let evaluation = EvaluationRepository::new(self.db)
            .create(course_subject.id, name, date, kind)
            .await?;

        tracing::info!(
            "Teacher {} created evaluation {} for course subject {}",
            teacher_id,
            evaluation.id,
            course_subject.id
        );

        let students = EnrollmentRepository::new(self.db)
            .get_student_ids(course.id, course.year)
            .await?;
        let total_students = students.len() as u64;

        if !students.is_empty() {
            let subject_name = SubjectRepository::new(self.db)
                .find_by_id(subject_id)
                .await?
                .map(|s| s.name)
                .unwrap_or_default();
            let teacher_name = VinculoRepository::new(self.db)
                .find_person(teacher_id)
                .await?
                .as_ref()
                .and_then(full_name);

            let teacher_label = teacher_name
                .as_ref()
                .map(|name| format!(" Profesor: {}.", name))
                .unwrap_or_default();
            let description = format!(
                "Se ha asignado una nueva evaluación '{}' para {} ({}). Fecha de entrega: {}.{}",
                evaluation.name, subject_name, course.name, evaluation.date, teacher_label
            );

            let txn = self.db.begin().await?;
            NotificationRepository::new(&txn)
                .create(
                    CreateNotificationParams {
                        school_id: course.school_id,
                        sender_id: teacher_id,
                        course_id: Some(course.id),
                        course_subject_id: Some(course_subject.id),
                        evaluation_id: Some(evaluation.id),
                        kind: "evaluacion".to_string(),
                        title: "Nueva evaluación".to_string(),
                        description: Some(description),
                        metadata: Some(json!({
                            "subjectName": subject_name,
                            "teacherName": teacher_name,
                            "evaluationType": evaluation.kind,
                        })),
                        recipients: students,
                    },
                    now,
                )
                .await?;
            txn.commit().await?;
        }

        Ok(EvaluationDto {
            evaluation_id: evaluation.id,
            name: evaluation.name,
            tipo: evaluation.kind,
            date: evaluation.date,
            graded_count: 0,
            total_students,
        })
    }

    /// Records or replaces a student's grade on an evaluation.
    ///
    /// # Returns
    /// - `Ok(GradeDto)` - Stored grade
    /// - `Err(AppError::BadRequest)` - Missing student or grade, or grade outside 1.0 to 7.0
    /// - `Err(AppError::NotFound)` - Unknown evaluation, or student not enrolled
    /// - `Err(AuthError::AccessDenied)` - Teacher has no access to the course subject
    pub async fn record_grade(
        &self,
        teacher_id: Uuid,
        evaluation_id: Uuid,
        payload: GradeInputDto,
    ) -> Result<GradeDto, AppError> {
        let student_id = payload
            .alumno_vinculo_id
            .ok_or_else(|| AppError::BadRequest("alumnoVinculoId is required".to_string()))?;
        let value = payload
            .nota
            .or(payload.calificacion)
            .ok_or_else(|| AppError::BadRequest("nota is required".to_string()))?;

        let evaluation = EvaluationRepository::new(self.db)
            .find_by_id(evaluation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Evaluación no encontrada".to_string()))?;

        if !Permission::CourseSubjectAccess(evaluation.course_subject_id)
            .check(self.db, teacher_id)
            .await?
        {
            return Err(AuthError::AccessDenied(
                teacher_id,
                "Not authorized to grade this evaluation".to_string(),
            )
            .into());
        }

        let course = match CourseSubjectRepository::new(self.db)
            .find_detail(evaluation.course_subject_id)
            .await?
        {
            Some(detail) => detail.course,
            None => {
                return Err(AppError::NotFound("Curso-materia no encontrado".to_string()));
            }
        };

        if !EnrollmentRepository::new(self.db)
            .is_enrolled(student_id, course.id, course.year)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Alumno {} no está matriculado en el curso",
                student_id
            )));
        }

        if !(grading::MIN_GRADE..=grading::MAX_GRADE).contains(&value) {
            return Err(AppError::BadRequest(format!(
                "nota must be between {:.1} and {:.1}",
                grading::MIN_GRADE,
                grading::MAX_GRADE
            )));
        }

        let grade = GradeRepository::new(self.db)
            .upsert(evaluation.id, student_id, value, payload.retroalimentacion)
            .await?;

        tracing::info!(
            "Teacher {} graded student {} on evaluation {}",
            teacher_id,
            student_id,
            evaluation.id
        );

        Ok(GradeDto {
            note_id: grade.id,
            evaluation_id: grade.evaluation_id,
            alumno_vinculo_id: grade.student_vinculo_id,
            nota: grade.value,
            retroalimentacion: grade.feedback,
        })
    }

    /// Gets the course roster for a year
    pub async fn students(&self, course_id: Uuid, year: i32) -> Result<RosterDto, AppError> {
        let students = EnrollmentRepository::new(self.db)
            .get_students(course_id, year)
            .await?;

        Ok(RosterDto {
            count: students.len(),
            students: students.into_iter().map(Student::into_roster_dto).collect(),
        })
    }

    /// Gets each enrolled student's recent grades and weighted average in a subject.
    pub async fn students_with_grades(
        &self,
        course_id: Uuid,
        subject_id: Uuid,
    ) -> Result<StudentsWithGradesDto, AppError> {
        let (course_subject, course) = self.find_course_subject(course_id, subject_id).await?;

        let evaluations = EvaluationRepository::new(self.db)
            .get_by_course_subject(course_subject.id)
            .await?;
        let total_evaluations = evaluations.len() as u64;
        let by_id: HashMap<Uuid, &entity::evaluation::Model> =
            evaluations.iter().map(|e| (e.id, e)).collect();
        let kinds: HashMap<Uuid, String> =
            evaluations.iter().map(|e| (e.id, e.kind.clone())).collect();

        let grades = GradeRepository::new(self.db)
            .get_by_evaluations(evaluations.iter().map(|e| e.id).collect())
            .await?;
        let averages = grading::weighted_student_averages(&grades, &kinds);

        let mut per_student: HashMap<Uuid, Vec<RecentGradeDto>> = HashMap::new();
        for grade in &grades {
            if let Some(evaluation) = by_id.get(&grade.evaluation_id) {
                per_student
                    .entry(grade.student_vinculo_id)
                    .or_default()
                    .push(RecentGradeDto {
                        evaluation_id: evaluation.id,
                        name: evaluation.name.clone(),
                        date: evaluation.date,
                        nota: grade.value,
                    });
            }
        }

        let students: Vec<StudentGradesDto> = EnrollmentRepository::new(self.db)
            .get_students(course.id, course.year)
            .await?
            .into_iter()
            .map(|student| {
                let mut recent = per_student.remove(&student.vinculo_id).unwrap_or_default();
                recent.sort_by(|a, b| b.date.cmp(&a.date));
                recent.truncate(RECENT_GRADES);

                let hidden = total_evaluations as i64 - recent.len() as i64;
                let promedio = averages.get(&student.vinculo_id).copied();

                StudentGradesDto {
                    alumno_vinculo_id: student.vinculo_id,
                    nombre_completo: student.full_name,
                    rut: student.rut,
                    recent_evaluations: recent,
                    more: (hidden > 0).then(|| format!("{}+", hidden)),
                    promedio,
                    estado: grading::standing(promedio),
                }
            })
            .collect();

        Ok(StudentsWithGradesDto {
            course_id,
            subject_id,
            total_evaluations,
            count: students.len(),
            students,
        })
    }

    /// Gets average, extremes and approvals over weighted student averages in a subject.
    pub async fn subject_stats(
        &self,
        course_id: Uuid,
        subject_id: Uuid,
    ) -> Result<SubjectGradeStatsDto, AppError> {
        let (course_subject, _) = self.find_course_subject(course_id, subject_id).await?;

        let evaluations = EvaluationRepository::new(self.db)
            .get_by_course_subject(course_subject.id)
            .await?;
        let kinds: HashMap<Uuid, String> =
            evaluations.iter().map(|e| (e.id, e.kind.clone())).collect();
        let grades = GradeRepository::new(self.db)
            .get_by_evaluations(kinds.keys().copied().collect())
            .await?;
        let averages = grading::weighted_student_averages(&grades, &kinds);

        Ok(SubjectGradeStatsDto {
            course_id,
            subject_id,
            course_average: grading::course_average(averages.values()),
            highest_student_average: averages.values().copied().reduce(f64::max),
            lowest_student_average: averages.values().copied().reduce(f64::min),
            approved_count: grading::count_approved(averages.values()),
            total_evaluations: evaluations.len() as u64,
        })
    }

    /// Finds the course subject for a course and subject along with its course.
    async fn find_course_subject(
        &self,
        course_id: Uuid,
        subject_id: Uuid,
    ) -> Result<(entity::course_subject::Model, entity::course::Model), AppError> {
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

        Ok((course_subject, course))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
