use axum::http::HeaderMap;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::{
    data::{
        course::CourseRepository, course_subject::CourseSubjectRepository,
        vinculo::VinculoRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::token::{extract_token, TokenClaims, TokenVerifier},
};

/// Access a teacher needs for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Teaches any subject in the course or heads it.
    CourseAccess(Uuid),
    /// Teaches the subject in the course or heads the course.
    SubjectAccess { course_id: Uuid, subject_id: Uuid },
    /// Teaches the course subject or heads its course.
    CourseSubjectAccess(Uuid),
}

impl Permission {
    /// Checks the permission for a vinculo without touching the request.
    ///
    /// A course subject that does not exist grants nothing.
    pub async fn check(&self, db: &DatabaseConnection, vinculo_id: Uuid) -> Result<bool, DbErr> {
        let course_repo = CourseRepository::new(db);
        let course_subject_repo = CourseSubjectRepository::new(db);

        match *self {
            Permission::CourseAccess(course_id) => {
                Ok(course_subject_repo
                    .teaches_in_course(vinculo_id, course_id)
                    .await?
                    || course_repo.is_head_teacher(vinculo_id, course_id).await?)
            }
            Permission::SubjectAccess {
                course_id,
                subject_id,
            } => Ok(course_subject_repo
                .teaches_subject(vinculo_id, course_id, subject_id)
                .await?
                || course_repo.is_head_teacher(vinculo_id, course_id).await?),
            Permission::CourseSubjectAccess(course_subject_id) => {
                let Some(course_subject) = course_subject_repo.find_by_id(course_subject_id).await?
                else {
                    return Ok(false);
                };

                Ok(course_subject.teacher_vinculo_id == vinculo_id
                    || course_repo
                        .is_head_teacher(vinculo_id, course_subject.course_id)
                        .await?)
            }
        }
    }

    fn denial_message(&self) -> String {
        match self {
            Permission::CourseAccess(_) => "Not authorized to access this course",
            Permission::SubjectAccess { .. } => "Not authorized to access this subject",
            Permission::CourseSubjectAccess(_) => "Not authorized to access this course subject",
        }
        .to_string()
    }
}

/// Caller identified by a verified token.
#[derive(Debug, Clone)]
pub struct AuthenticatedTeacher {
    pub vinculo_id: Uuid,
    pub claims: TokenClaims,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    verifier: &'a TokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        verifier: &'a TokenVerifier,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            verifier,
            headers,
        }
    }

    /// Verifies the request token and resolves the caller's vinculo.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedTeacher)` - Token verified and vinculo resolved
    /// - `Err(AuthError::MissingToken)` - No cookie or bearer token, or an empty cookie
    /// - `Err(AuthError::KeyNotConfigured)` / `Err(AuthError::InvalidToken)` - Verification failed
    /// - `Err(AuthError::MissingIdentity)` / `Err(AuthError::MalformedIdentity)` - Claims lack a usable identity
    /// - `Err(AuthError::VinculoNotFound)` - No vinculo for the token's person and school
    pub async fn authenticate(&self) -> Result<AuthenticatedTeacher, AppError> {
        let token = extract_token(self.headers)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;
        let claims = self.verifier.verify(&token)?;
        let vinculo_id = self.resolve_vinculo(&claims).await?;

        Ok(AuthenticatedTeacher { vinculo_id, claims })
    }

    /// Authenticates the caller and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedTeacher)` - All permissions granted
    /// - `Err(AuthError::AccessDenied)` - First permission the caller lacks
    /// - Any error from [`AuthGuard::authenticate`]
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthenticatedTeacher, AppError> {
        let teacher = self.authenticate().await?;

        for permission in permissions {
            if !permission.check(self.db, teacher.vinculo_id).await? {
                return Err(
                    AuthError::AccessDenied(teacher.vinculo_id, permission.denial_message()).into(),
                );
            }
        }

        Ok(teacher)
    }

    async fn resolve_vinculo(&self, claims: &TokenClaims) -> Result<Uuid, AppError> {
        if let Some(sub) = claims.sub.as_deref().filter(|s| !s.trim().is_empty()) {
            return parse_identity(sub);
        }

        let (Some(person_id), Some(school_id)) =
            (claims.persona_id.as_deref(), claims.colegio_id.as_deref())
        else {
            return Err(AuthError::MissingIdentity.into());
        };

        let vinculo = VinculoRepository::new(self.db)
            .find_by_person_and_school(parse_identity(person_id)?, parse_identity(school_id)?)
            .await?
            .ok_or(AuthError::VinculoNotFound)?;

        Ok(vinculo.id)
    }
}

fn parse_identity(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| AuthError::MalformedIdentity(value.to_string()).into())
}
