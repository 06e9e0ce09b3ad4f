use axum::http::{header, HeaderMap, HeaderValue};
use serde_json::Value;
use test_utils::{
    builder::TestBuilder,
    factory,
    fixture::token::{sign_token, PUBLIC_KEY_PEM},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        token::TokenVerifier,
    },
};

mod authenticate;
mod require;

/// Builds bearer headers carrying a token signed with the test key.
fn bearer(claims: &Value) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", sign_token(claims))).unwrap(),
    );
    headers
}

fn verifier() -> TokenVerifier {
    TokenVerifier::from_rsa_pem(PUBLIC_KEY_PEM).unwrap()
}
