//! Bearer/cookie token extraction and RS256 verification.

use std::collections::HashSet;

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use percent_encoding::percent_decode_str;
use serde::Deserialize;

use crate::server::error::{auth::AuthError, config::ConfigError};

/// Cookie names the identity service sets the token under.
const AUTH_COOKIES: [&str; 2] = ["Authentication", "authentication"];

/// Claims issued by the platform's identity service.
///
/// Only `sub`, or `personaId` with `colegioId`, are needed to identify the caller; the
/// rest is carried through to the profile endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    pub sub: Option<String>,
    pub rol: Option<String>,
    #[serde(rename = "personaId")]
    pub persona_id: Option<String>,
    #[serde(rename = "colegioId")]
    pub colegio_id: Option<String>,
    pub scope: Option<serde_json::Value>,
    pub iat: Option<i64>,
    pub exp: Option<i64>,
}

/// Verifies RS256 tokens against the configured public key.
#[derive(Clone)]
pub struct TokenVerifier {
    key: Option<DecodingKey>,
    validation: Validation,
}

impl TokenVerifier {
    /// Builds a verifier for an SPKI or PKCS#1 RSA public key in PEM form.
    ///
    /// # Returns
    /// - `Ok(TokenVerifier)` - Verifier ready to check tokens
    /// - `Err(ConfigError::InvalidEnvVar)` - PEM could not be parsed as an RSA key
    pub fn from_rsa_pem(pem: &str) -> Result<Self, ConfigError> {
        let key =
            DecodingKey::from_rsa_pem(pem.as_bytes()).map_err(|e| ConfigError::InvalidEnvVar {
                name: "JWT_PUBLIC_KEY".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            key: Some(key),
            validation: Self::validation(),
        })
    }

    /// Builds a verifier that rejects every token with `KeyNotConfigured`.
    pub fn without_key() -> Self {
        Self {
            key: None,
            validation: Self::validation(),
        }
    }

    /// RS256 only; `exp` is checked when present but not required, audience is ignored.
    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.required_spec_claims = HashSet::new();
        validation.validate_aud = false;
        validation
    }

    /// Verifies the signature and expiry of a token and returns its claims.
    ///
    /// # Returns
    /// - `Ok(TokenClaims)` - Token is authentic and not expired
    /// - `Err(AuthError::KeyNotConfigured)` - No public key configured
    /// - `Err(AuthError::InvalidToken)` - Bad signature, wrong algorithm, expired or malformed
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let key = self.key.as_ref().ok_or(AuthError::KeyNotConfigured)?;

        decode::<TokenClaims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// Extracts the raw token from request headers.
///
/// A present `Authentication` cookie wins over the `Authorization: Bearer` header,
/// even when its value is empty. Cookie values are percent-decoded.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = token_from_cookies(headers) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
}

fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| AUTH_COOKIES.contains(name))
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

fn bearer_token(value: &str) -> Option<String> {
    let (scheme, rest) = value.split_at_checked(7)?;
    if !scheme.eq_ignore_ascii_case("bearer ") {
        return None;
    }

    let token = rest.trim();
    (!token.is_empty()).then(|| token.to_string())
}
