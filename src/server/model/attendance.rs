//! Attendance statuses and their storage representation.

use crate::{model::attendance::AttendanceMarkDto, server::error::AppError};

/// Status stored for a student on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// Parses the stored or submitted status name.
    ///
    /// # Returns
    /// - `Ok(AttendanceStatus)` - One of `presente`, `ausente` or `tardanza`
    /// - `Err(AppError::BadRequest)` - Any other value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "presente" => Ok(Self::Present),
            "ausente" => Ok(Self::Absent),
            "tardanza" => Ok(Self::Late),
            other => Err(AppError::BadRequest(format!(
                "Invalid attendance status '{}'",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "presente",
            Self::Absent => "ausente",
            Self::Late => "tardanza",
        }
    }

    /// Maps a stored status to the mark clients see; unknown values read as not recorded.
    pub fn mark_of(stored: Option<&str>) -> AttendanceMarkDto {
        match stored.map(Self::parse) {
            Some(Ok(Self::Present)) => AttendanceMarkDto::Presente,
            Some(Ok(Self::Absent)) => AttendanceMarkDto::Ausente,
            Some(Ok(Self::Late)) => AttendanceMarkDto::Tardanza,
            _ => AttendanceMarkDto::NoRegistrado,
        }
    }
}
