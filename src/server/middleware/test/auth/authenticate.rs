use serde_json::json;
use test_utils::fixture::token::{claims_for_person, claims_for_vinculo};
use uuid::Uuid;

use super::*;

/// Tests the vinculo is taken from `sub`.
///
/// Expected: Ok with the `sub` vinculo, without a database lookup
#[tokio::test]
async fn resolves_vinculo_from_sub() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_institution_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let vinculo_id = Uuid::new_v4();
    let headers = bearer(&claims_for_vinculo(vinculo_id));
    let verifier = verifier();

    let teacher = AuthGuard::new(db, &verifier, &headers).authenticate().await?;

    assert_eq!(teacher.vinculo_id, vinculo_id);
    assert_eq!(teacher.claims.rol.as_deref(), Some("profesor"));

    Ok(())
}

/// Tests the vinculo is looked up from person and school claims.
///
/// Expected: Ok with the vinculo linking the person to the school
#[tokio::test]
async fn resolves_vinculo_from_person_and_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_institution_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let teacher = factory::helpers::create_teacher(db, school.id).await?;
    let headers = bearer(&claims_for_person(teacher.person_id, school.id));
    let verifier = verifier();

    let authenticated = AuthGuard::new(db, &verifier, &headers).authenticate().await?;

    assert_eq!(authenticated.vinculo_id, teacher.id);

    Ok(())
}

/// Tests a person without a vinculo at the school is rejected.
///
/// Expected: Err(AuthError::VinculoNotFound)
#[tokio::test]
async fn fails_when_person_has_no_vinculo_at_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_institution_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let other_school = factory::create_school(db).await?;
    let teacher = factory::helpers::create_teacher(db, school.id).await?;
    let headers = bearer(&claims_for_person(teacher.person_id, other_school.id));
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::VinculoNotFound))
    ));

    Ok(())
}

/// Tests a token without any identity claim is rejected.
///
/// Expected: Err(AuthError::MissingIdentity)
#[tokio::test]
async fn fails_without_identity_claims() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_institution_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = bearer(&json!({ "rol": "profesor", "personaId": Uuid::new_v4().to_string() }));
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingIdentity))
    ));

    Ok(())
}

/// Tests a `sub` that is not a UUID is rejected.
///
/// Expected: Err(AuthError::MalformedIdentity)
#[tokio::test]
async fn fails_with_malformed_sub() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_institution_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = bearer(&json!({ "sub": "not-a-uuid" }));
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MalformedIdentity(_)))
    ));

    Ok(())
}

/// Tests requests without a token are rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_institution_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = HeaderMap::new();
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers).authenticate().await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}

/// Tests an empty authentication cookie is not replaced by a valid bearer token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_with_empty_cookie_despite_bearer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_institution_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mut headers = bearer(&claims_for_vinculo(Uuid::new_v4()));
    headers.insert(header::COOKIE, HeaderValue::from_static("Authentication="));
    let verifier = verifier();

    let result = AuthGuard::new(db, &verifier, &headers).authenticate().await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}
