use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::{
    model::attendance::{
        AttendanceEntryDto, AttendanceResultDto, CourseOptionDto, DayAttendanceDto,
        DayAttendanceStudentDto, RosterDto, TakeAttendanceDto,
    },
    server::{
        data::{
            attendance::AttendanceRepository, course::CourseRepository,
            course_subject::CourseSubjectRepository, enrollment::EnrollmentRepository,
            notification::NotificationRepository, vinculo::VinculoRepository,
        },
        error::AppError,
        middleware::auth::Permission,
        model::{
            attendance::AttendanceStatus, notification::CreateNotificationParams,
            student::Student,
        },
        util::{date::parse_date, name::full_name},
    },
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the courses the teacher teaches in or heads, ordered by name
    pub async fn courses(&self, teacher_id: Uuid) -> Result<Vec<CourseOptionDto>, AppError> {
        let mut courses = CourseRepository::new(self.db)
            .get_for_teacher(teacher_id)
            .await?;
        courses.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(courses
            .into_iter()
            .map(|c| CourseOptionDto {
                course_id: c.id,
                course_name: c.name,
            })
            .collect())
    }

    /// Gets the course roster for a year.
    ///
    /// A teacher without access to the course gets an empty roster rather than an error.
    pub async fn students(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
        year: i32,
    ) -> Result<RosterDto, AppError> {
        if !Permission::CourseAccess(course_id)
            .check(self.db, teacher_id)
            .await?
        {
            return Ok(RosterDto {
                count: 0,
                students: Vec::new(),
            });
        }

        let students = EnrollmentRepository::new(self.db)
            .get_students(course_id, year)
            .await?;

        Ok(RosterDto {
            count: students.len(),
            students: students.into_iter().map(Student::into_roster_dto).collect(),
        })
    }

    /// Gets every enrolled student's mark on a date; unmarked students read `no_registrado`.
    pub async fn day(&self, course_id: Uuid, date: NaiveDate) -> Result<DayAttendanceDto, AppError> {
        let students = EnrollmentRepository::new(self.db)
            .get_students(course_id, date.year())
            .await?;
        let marks: HashMap<Uuid, String> = AttendanceRepository::new(self.db)
            .get_by_course_and_date(course_id, date)
            .await?
            .into_iter()
            .map(|r| (r.student_vinculo_id, r.status))
            .collect();

        let students: Vec<DayAttendanceStudentDto> = students
            .into_iter()
            .map(|s| DayAttendanceStudentDto {
                estado: AttendanceStatus::mark_of(marks.get(&s.vinculo_id).map(String::as_str)),
                alumno_vinculo_id: s.vinculo_id,
                rut: s.rut,
                nombre_completo: s.full_name,
            })
            .collect();

        Ok(DayAttendanceDto {
            course_id,
            fecha: date,
            count: students.len(),
            students,
        })
    }

    /// Overwrites marks for a date in a single transaction.
    ///
    /// # Returns
    /// - `Ok(AttendanceResultDto)` - Every mark written
    /// - `Err(AppError::BadRequest)` - No updates or an unknown status
    /// - `Err(AppError::NotFound)` - A student is not enrolled for the date's year; nothing is written
    pub async fn update(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
        date: NaiveDate,
        updates: Vec<AttendanceEntryDto>,
        now: DateTime<Utc>,
    ) -> Result<AttendanceResultDto, AppError> {
        if updates.is_empty() {
            return Err(AppError::BadRequest("updates must not be empty".to_string()));
        }

        let marks = self.record(teacher_id, course_id, date, &updates, now).await?;

        tracing::info!(
            "Teacher {} updated {} attendance marks for course {} on {}",
            teacher_id,
            marks.len(),
            course_id,
            date
        );

        Ok(AttendanceResultDto {
            course_id,
            fecha: date,
            processed: marks.len(),
        })
    }

    /// Takes attendance for a date and notifies each absent student.
    ///
    /// # Returns
    /// - `Ok(AttendanceResultDto)` - Marks written and notifications sent
    /// - `Err(AppError::BadRequest)` - Missing or invalid fecha, no attendances, unknown status,
    ///   or a course subject from another course
    /// - `Err(AppError::NotFound)` - Unknown course or course subject, or a student not enrolled
    pub async fn take(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
        payload: TakeAttendanceDto,
        now: DateTime<Utc>,
    ) -> Result<AttendanceResultDto, AppError> {
        let fecha = payload
            .fecha
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| AppError::BadRequest("fecha is required".to_string()))?;
        let date = parse_date(fecha)?;

        if payload.attendances.is_empty() {
            return Err(AppError::BadRequest(
                "attendances must not be empty".to_string(),
            ));
        }

        if let Some(course_subject_id) = payload.curso_materia_id {
            let course_subject = CourseSubjectRepository::new(self.db)
                .find_by_id(course_subject_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Curso-materia no encontrado".to_string()))?;
            if course_subject.course_id != course_id {
                return Err(AppError::BadRequest(
                    "cursoMateriaId does not belong to the course".to_string(),
                ));
            }
        }

        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Curso no encontrado".to_string()))?;

        let marks = self
            .record(teacher_id, course_id, date, &payload.attendances, now)
            .await?;

        let mut seen = HashSet::new();
        let absent: Vec<Uuid> = marks
            .iter()
            .filter(|(_, status)| *status == AttendanceStatus::Absent)
            .map(|(student, _)| *student)
            .filter(|student| seen.insert(*student))
            .collect();

        if !absent.is_empty() {
            let teacher_name = VinculoRepository::new(self.db)
                .find_person(teacher_id)
                .await?
                .as_ref()
                .and_then(full_name);

            for student_id in &absent {
                let txn = self.db.begin().await?;
                NotificationRepository::new(&txn)
                    .create(
                        CreateNotificationParams {
                            school_id: course.school_id,
                            sender_id: teacher_id,
                            course_id: Some(course.id),
                            course_subject_id: payload.curso_materia_id,
                            evaluation_id: None,
                            kind: "asistencia".to_string(),
                            title: "Asistencia registrada".to_string(),
                            description: Some(format!("Has quedado ausente el día {}", date)),
                            metadata: Some(json!({
                                "courseName": course.name,
                                "fecha": date.to_string(),
                                "teacherName": teacher_name,
                            })),
                            recipients: vec![*student_id],
                        },
                        now,
                    )
                    .await?;
                txn.commit().await?;
            }
        }

        tracing::info!(
            "Teacher {} took attendance for course {} on {} ({} marks, {} absent)",
            teacher_id,
            course_id,
            date,
            marks.len(),
            absent.len()
        );

        Ok(AttendanceResultDto {
            course_id,
            fecha: date,
            processed: marks.len(),
        })
    }

    /// Validates entries and upserts them in one transaction.
    ///
    /// Statuses and enrollment are checked for every entry before anything is written.
    async fn record(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
        date: NaiveDate,
        entries: &[AttendanceEntryDto],
        now: DateTime<Utc>,
    ) -> Result<Vec<(Uuid, AttendanceStatus)>, AppError> {
        let marks = entries
            .iter()
            .map(|e| Ok((e.alumno_vinculo_id, AttendanceStatus::parse(&e.estado)?)))
            .collect::<Result<Vec<_>, AppError>>()?;

        let student_ids: Vec<Uuid> = marks.iter().map(|(id, _)| *id).collect();
        let unenrolled = EnrollmentRepository::new(self.db)
            .find_unenrolled(course_id, date.year(), &student_ids)
            .await?;
        if let Some(student_id) = unenrolled.first() {
            return Err(AppError::NotFound(format!(
                "Alumno {} no está matriculado en el curso",
                student_id
            )));
        }

        let txn = self.db.begin().await?;
        let attendance_repo = AttendanceRepository::new(&txn);
        for (student_id, status) in &marks {
            attendance_repo
                .upsert(course_id, *student_id, date, *status, teacher_id, now)
                .await?;
        }
        txn.commit().await?;

        Ok(marks)
    }
}
