//! Process configuration read from the environment at startup.

use crate::config::db::DbProfile;
use crate::domain::lifecycle::LifecycleRules;
use crate::error::AppError;

/// Where game data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Sql(DbProfile),
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub storage: StorageConfig,
    pub rules: LifecycleRules,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("BACKEND_PORT must be a port number, got '{raw}'")))?,
            None => 3001,
        };
        let jwt_secret = lookup("BACKEND_JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::config("BACKEND_JWT_SECRET must be set"))?;

        let storage = match lookup("TOMBOLA_STORAGE").as_deref() {
            None | Some("postgres") => StorageConfig::Sql(DbProfile::Postgres),
            Some("sqlite") => StorageConfig::Sql(DbProfile::SqliteFile(
                lookup("SQLITE_PATH").unwrap_or_else(|| "tombola.sqlite".to_string()),
            )),
            Some("memory") => StorageConfig::Memory,
            Some(other) => {
                return Err(AppError::config(format!(
                    "TOMBOLA_STORAGE must be postgres, sqlite or memory, got '{other}'"
                )))
            }
        };

        let allow_end_unstarted = match lookup("TOMBOLA_ALLOW_END_UNSTARTED").as_deref() {
            None => LifecycleRules::default().allow_end_unstarted,
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                AppError::config(format!(
                    "TOMBOLA_ALLOW_END_UNSTARTED must be true or false, got '{raw}'"
                ))
            })?,
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            storage,
            rules: LifecycleRules {
                allow_end_unstarted,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
