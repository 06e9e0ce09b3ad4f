//! Course subject joined with its course and subject rows.

use crate::model::{
    assessment::CourseSubjectOptionDto, filter::CourseSubjectFilterDto, home::TeacherSubjectDto,
};

/// A teaching assignment with the names screens need.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSubjectDetail {
    pub course_subject: entity::course_subject::Model,
    pub course: entity::course::Model,
    pub subject: entity::subject::Model,
}

impl CourseSubjectDetail {
    pub fn to_subject_dto(&self) -> TeacherSubjectDto {
        TeacherSubjectDto {
            course_id: Some(self.course.id),
            course_name: self.course.name.clone(),
            subject_id: self.subject.id,
            subject_name: self.subject.name.clone(),
        }
    }

    pub fn into_option_dto(self) -> CourseSubjectOptionDto {
        CourseSubjectOptionDto {
            curso_materia_id: self.course_subject.id,
            subject_id: self.subject.id,
            subject_name: self.subject.name,
        }
    }

    pub fn into_filter_dto(self) -> CourseSubjectFilterDto {
        CourseSubjectFilterDto {
            label: format!("{} - {}", self.course.name, self.subject.name),
            course_id: self.course.id,
            course_name: self.course.name,
            year: self.course.year,
            subject_id: self.subject.id,
            subject_name: self.subject.name,
        }
    }
}
