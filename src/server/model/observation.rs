//! Observation kinds and creation parameters.

use uuid::Uuid;

use crate::{model::observation::ObservationKind, server::error::AppError};

impl ObservationKind {
    /// Parses `positiva`, `negativa` or `informativa`.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "positiva" => Ok(Self::Positiva),
            "negativa" => Ok(Self::Negativa),
            "informativa" => Ok(Self::Informativa),
            _ => Err(AppError::BadRequest(
                "tipo must be one of positiva, negativa, informativa".to_string(),
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positiva => "positiva",
            Self::Negativa => "negativa",
            Self::Informativa => "informativa",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateObservationParams {
    pub student_id: Uuid,
    pub teacher_id: Uuid,
    pub course_id: Uuid,
    pub course_subject_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: String,
    pub kind: ObservationKind,
}
