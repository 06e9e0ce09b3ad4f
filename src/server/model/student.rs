//! Student read model shared by rosters, grade books and analytics.

use uuid::Uuid;

use crate::{
    model::{attendance::RosterStudentDto, filter::StudentFilterDto},
    server::util::name::full_name,
};

/// Enrolled student with the person fields screens display.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub vinculo_id: Uuid,
    pub rut: Option<String>,
    pub full_name: Option<String>,
    /// Sort keys; lists are ordered by paternal surname, then first name.
    pub paternal_surname: String,
    pub first_name: String,
}

impl Student {
    /// Builds a student from its vinculo id and the linked person, if any.
    pub fn from_entity(vinculo_id: Uuid, person: Option<&entity::person::Model>) -> Self {
        match person {
            Some(person) => Self {
                vinculo_id,
                rut: person.rut.clone(),
                full_name: full_name(person),
                paternal_surname: person.paternal_surname.clone().unwrap_or_default(),
                first_name: person.first_name.clone(),
            },
            None => Self {
                vinculo_id,
                rut: None,
                full_name: None,
                paternal_surname: String::new(),
                first_name: String::new(),
            },
        }
    }

    /// Orders students by paternal surname, then first name, case-insensitively.
    pub fn sort(students: &mut [Student]) {
        students.sort_by(|a, b| {
            a.paternal_surname
                .to_lowercase()
                .cmp(&b.paternal_surname.to_lowercase())
                .then_with(|| a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()))
        });
    }

    pub fn into_roster_dto(self) -> RosterStudentDto {
        RosterStudentDto {
            alumno_vinculo_id: self.vinculo_id,
            rut: self.rut,
            nombre_completo: self.full_name,
        }
    }

    pub fn into_filter_dto(self) -> StudentFilterDto {
        StudentFilterDto {
            alumno_vinculo_id: self.vinculo_id,
            rut: self.rut,
            nombre_completo: self.full_name,
        }
    }
}
