use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3002;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3004";

pub struct Config {
    pub database_url: String,

    /// RS256 public key in PEM form. Without it every authenticated request is rejected.
    pub jwt_public_key: Option<String>,

    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_public_key: std::env::var("JWT_PUBLIC_KEY")
                .ok()
                .map(|raw| normalize_public_key(&raw))
                .filter(|key| !key.is_empty()),
            port,
            allowed_origins: parse_origins(&allowed_origins),
        })
    }
}

/// Undoes the quoting and `\n` escaping that `.env` files and container secrets apply
/// to multi-line PEM values.
pub fn normalize_public_key(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);

    unquoted.replace("\\n", "\n").trim().to_string()
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
