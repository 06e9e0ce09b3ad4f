use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{
    config::Config, error::AppError, middleware::token::TokenVerifier,
};

/// Initializes the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to info-level output for this crate
/// and the HTTP trace layer.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sage_teacher=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the token verifier from the configured public key.
///
/// A missing key is not fatal: the server starts and rejects authenticated requests
/// until one is configured.
///
/// # Returns
/// - `Ok(TokenVerifier)` - Verifier with or without a key
/// - `Err(AppError::ConfigErr)` - Key present but not a valid RSA public key
pub fn setup_token_verifier(config: &Config) -> Result<TokenVerifier, AppError> {
    match config.jwt_public_key.as_deref() {
        Some(pem) => Ok(TokenVerifier::from_rsa_pem(pem)?),
        None => {
            tracing::warn!("JWT_PUBLIC_KEY is not set; all authenticated requests will fail");
            Ok(TokenVerifier::without_key())
        }
    }
}

/// Builds the CORS layer for the configured origins with credentials allowed.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn setup_cors(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::COOKIE])
}
