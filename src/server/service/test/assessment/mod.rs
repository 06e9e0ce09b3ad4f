use crate::{
    model::assessment::{CreateEvaluationDto, GradeInputDto, GradeStanding},
    server::{
        error::{auth::AuthError, AppError},
        service::assessment::AssessmentService,
    },
};
use chrono::{NaiveDate, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, evaluation::EvaluationFactory},
};

mod course_subjects;
mod create_evaluation;
mod evaluations;
mod record_grade;
mod students_with_grades;

fn evaluation_payload(name: &str, fecha: &str) -> CreateEvaluationDto {
    CreateEvaluationDto {
        name: Some(name.to_string()),
        tipo: None,
        fecha: Some(fecha.to_string()),
    }
}

fn grade_input(student_id: uuid::Uuid, nota: f64) -> GradeInputDto {
    GradeInputDto {
        alumno_vinculo_id: Some(student_id),
        nota: Some(nota),
        calificacion: None,
        retroalimentacion: None,
    }
}
