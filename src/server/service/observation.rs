use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    model::observation::{
        CreateObservationDto, ObservationDto, ObservationItemDto, ObservationKind,
        ObservationListDto,
    },
    server::{
        data::{
            course::CourseRepository, course_subject::CourseSubjectRepository,
            enrollment::EnrollmentRepository, observation::ObservationRepository,
            vinculo::VinculoRepository,
        },
        error::{auth::AuthError, AppError},
        middleware::auth::Permission,
        model::observation::CreateObservationParams,
        util::{date::format_dmy, name::full_name},
    },
};

pub struct ObservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ObservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the observations a teacher wrote in a course, newest first.
    ///
    /// Totals always cover every observation; `kind` only filters the items.
    pub async fn list(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
        kind: Option<ObservationKind>,
    ) -> Result<ObservationListDto, AppError> {
        let observations = ObservationRepository::new(self.db)
            .get_by_teacher_and_course(teacher_id, course_id)
            .await?;

        let course_name = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .map(|c| c.name)
            .unwrap_or_default();
        let subject_names: HashMap<Uuid, String> = CourseSubjectRepository::new(self.db)
            .get_details_for_teacher(teacher_id, Some(course_id))
            .await?
            .into_iter()
            .map(|d| (d.course_subject.id, d.subject.name))
            .collect();
        let students = VinculoRepository::new(self.db)
            .get_persons(observations.iter().map(|o| o.student_vinculo_id).collect())
            .await?;

        let mut list = ObservationListDto {
            total: 0,
            positivas: 0,
            negativas: 0,
            informativas: 0,
            items: Vec::new(),
        };

        for observation in observations {
            list.total += 1;
            let Ok(tipo) = ObservationKind::parse(&observation.kind) else {
                tracing::warn!(
                    "Observation {} has unknown kind '{}'",
                    observation.id,
                    observation.kind
                );
                continue;
            };

            match tipo {
                ObservationKind::Positiva => list.positivas += 1,
                ObservationKind::Negativa => list.negativas += 1,
                ObservationKind::Informativa => list.informativas += 1,
            }

            if kind.is_some_and(|k| k != tipo) {
                continue;
            }

            list.items.push(ObservationItemDto {
                title: observation.title,
                student_name: students
                    .get(&observation.student_vinculo_id)
                    .and_then(full_name),
                course: course_name.clone(),
                subject: observation
                    .course_subject_id
                    .and_then(|id| subject_names.get(&id).cloned()),
                description: observation.description,
                tipo,
                date: format_dmy(observation.created_at.date_naive()),
            });
        }

        Ok(list)
    }

    /// Records an observation about a student.
    ///
    /// A `cursoMateriaId` that resolves decides the course; the path course is used
    /// otherwise.
    ///
    /// # Returns
    /// - `Ok(ObservationDto)` - Stored observation
    /// - `Err(AppError::BadRequest)` - Missing fields, unknown tipo, or a course subject
    ///   outside the course
    /// - `Err(AuthError::AccessDenied)` - Teacher has no access to the course
    /// - `Err(AppError::NotFound)` - Student not enrolled for the course year
    pub async fn create(
        &self,
        teacher_id: Uuid,
        course_id: Uuid,
        payload: CreateObservationDto,
        now: DateTime<Utc>,
    ) -> Result<ObservationDto, AppError> {
        let student_id = payload
            .alumno_vinculo_id
            .ok_or_else(|| AppError::BadRequest("alumnoVinculoId is required".to_string()))?;
        let tipo = payload
            .tipo
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("tipo is required".to_string()))?;
        let kind = ObservationKind::parse(tipo)?;
        let description = payload
            .descripcion
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("descripcion is required".to_string()))?;

        let course_subject = match payload.curso_materia_id {
            Some(id) => CourseSubjectRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };
        let course_id = course_subject
            .as_ref()
            .map(|cs| cs.course_id)
            .unwrap_or(course_id);

        if !Permission::CourseAccess(course_id)
            .check(self.db, teacher_id)
            .await?
        {
            return Err(AuthError::AccessDenied(
                teacher_id,
                "Not authorized to create observations for this course".to_string(),
            )
            .into());
        }

        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Curso no encontrado".to_string()))?;
        if !EnrollmentRepository::new(self.db)
            .is_enrolled(student_id, course.id, course.year)
            .await?
        {
            return Err(AppError::NotFound(
                "Student is not enrolled in this course for the year".to_string(),
            ));
        }

        if payload.curso_materia_id.is_some() && course_subject.is_none() {
            return Err(AppError::BadRequest(
                "cursoMateriaId does not belong to the provided course".to_string(),
            ));
        }

        let observation = ObservationRepository::new(self.db)
            .create(
                CreateObservationParams {
                    student_id,
                    teacher_id,
                    course_id,
                    course_subject_id: payload.curso_materia_id,
                    title: payload.titulo,
                    description,
                    kind,
                },
                now,
            )
            .await?;

        tracing::info!(
            "Teacher {} recorded {} observation {} for student {}",
            teacher_id,
            kind.as_str(),
            observation.id,
            student_id
        );

        Ok(ObservationDto {
            observation_id: observation.id,
            alumno_vinculo_id: observation.student_vinculo_id,
            profesor_vinculo_id: observation.teacher_vinculo_id,
            course_id: observation.course_id,
            curso_materia_id: observation.course_subject_id,
            title: observation.title,
            description: observation.description,
            tipo: kind,
            date: format_dmy(observation.created_at.date_naive()),
        })
    }
}
