use crate::error::AppError;

/// Which SQL database a connection targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// PostgreSQL assembled from `POSTGRES_*`, `PROD_DB` and `APP_DB_*`
    Postgres,
    /// SQLite file at the given path, created if missing
    SqliteFile(String),
    /// Private in-memory SQLite database (tests)
    SqliteMemory,
}

impl DbProfile {
    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbProfile::SqliteFile(_) | DbProfile::SqliteMemory)
    }
}

/// Builds a database URL from the process environment.
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    db_url_with(profile, |name| std::env::var(name).ok())
}

/// Builds a database URL using `lookup` for environment values.
pub fn db_url_with<F>(profile: &DbProfile, lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match profile {
        DbProfile::Postgres => {
            let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = must_var(&lookup, "PROD_DB")?;
            let username = must_var(&lookup, "APP_DB_USER")?;
            let password = must_var(&lookup, "APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbProfile::SqliteFile(path) => Ok(format!("sqlite://{path}?mode=rwc")),
        DbProfile::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

fn must_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
