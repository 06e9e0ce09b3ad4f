use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    model::course::{CourseAnalyticsDto, CourseSummaryDto, RiskCategory, StudentAnalyticsDto},
    server::{
        data::{
            attendance::AttendanceRepository, course::CourseRepository,
            course_subject::CourseSubjectRepository, enrollment::EnrollmentRepository,
            evaluation::EvaluationRepository, grade::GradeRepository,
        },
        error::AppError,
        model::attendance::AttendanceStatus,
        service::grading,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets enrollment and grade average of the course the teacher heads.
    ///
    /// # Returns
    /// - `Ok(Some(CourseSummaryDto))` - Teacher heads a course
    /// - `Ok(None)` - Teacher heads no course
    pub async fn summary(&self, teacher_id: Uuid) -> Result<Option<CourseSummaryDto>, AppError> {
        let Some(course) = self.head_course(teacher_id).await? else {
            return Ok(None);
        };

        let students_count = EnrollmentRepository::new(self.db)
            .count_students(course.id, course.year)
            .await?;
        let averages = self.weighted_averages(course.id).await?;

        Ok(Some(CourseSummaryDto {
            course_id: course.id,
            students_count,
            course_average: grading::course_average(averages.values()),
        }))
    }

    /// Scores dropout risk for every student of the course the teacher heads.
    ///
    /// Students without grades are scored with the course average. A teacher heading
    /// no course gets an empty result.
    pub async fn student_analytics(&self, teacher_id: Uuid) -> Result<CourseAnalyticsDto, AppError> {
        let Some(course) = self.head_course(teacher_id).await? else {
            return Ok(CourseAnalyticsDto {
                course_id: None,
                students: Vec::new(),
                medium_risk_count: 0,
                critical_risk_count: 0,
            });
        };

        let students = EnrollmentRepository::new(self.db)
            .get_students(course.id, course.year)
            .await?;
        let averages = self.weighted_averages(course.id).await?;
        let course_average = grading::course_average(averages.values());

        let mut attendance: HashMap<Uuid, (u64, u64)> = HashMap::new();
        for record in AttendanceRepository::new(self.db)
            .get_by_course(course.id)
            .await?
        {
            let entry = attendance.entry(record.student_vinculo_id).or_default();
            entry.1 += 1;
            if AttendanceStatus::parse(&record.status).ok() == Some(AttendanceStatus::Present) {
                entry.0 += 1;
            }
        }

        let students: Vec<StudentAnalyticsDto> = students
            .into_iter()
            .map(|student| {
                let promedio = averages.get(&student.vinculo_id).copied();
                let (present, total) = attendance
                    .get(&student.vinculo_id)
                    .copied()
                    .unwrap_or_default();
                let asistencia = grading::attendance_percent(present, total);
                let riesgo = grading::risk_score(
                    promedio.or(course_average).unwrap_or(0.0),
                    asistencia,
                );

                StudentAnalyticsDto {
                    alumno_vinculo_id: student.vinculo_id,
                    rut: student.rut,
                    nombre_completo: student.full_name,
                    promedio,
                    asistencia_percent: asistencia,
                    riesgo_percent: riesgo,
                    riesgo_categoria: grading::risk_category(riesgo, asistencia),
                }
            })
            .collect();

        let count = |category: RiskCategory| {
            students
                .iter()
                .filter(|s| s.riesgo_categoria == category)
                .count() as u64
        };

        Ok(CourseAnalyticsDto {
            course_id: Some(course.id),
            medium_risk_count: count(RiskCategory::Medio),
            critical_risk_count: count(RiskCategory::Critico),
            students,
        })
    }

    /// Newest course the teacher heads.
    async fn head_course(&self, teacher_id: Uuid) -> Result<Option<entity::course::Model>, AppError> {
        Ok(CourseRepository::new(self.db)
            .get_headed_by(teacher_id)
            .await?
            .into_iter()
            .next())
    }

    /// Weighted average per student across every evaluation of the course.
    async fn weighted_averages(&self, course_id: Uuid) -> Result<HashMap<Uuid, f64>, AppError> {
        let course_subject_ids = CourseSubjectRepository::new(self.db)
            .get_by_course(course_id)
            .await?
            .into_iter()
            .map(|cs| cs.id)
            .collect();
        let evaluations = EvaluationRepository::new(self.db)
            .get_by_course_subjects(course_subject_ids)
            .await?;

        let kinds: HashMap<Uuid, String> = evaluations.iter().map(|e| (e.id, e.kind.clone())).collect();
        let grades = GradeRepository::new(self.db)
            .get_by_evaluations(kinds.keys().copied().collect())
            .await?;

        Ok(grading::weighted_student_averages(&grades, &kinds))
    }
}
