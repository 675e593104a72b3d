use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the directory snapshot is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => bail!("Unknown storage backend: {other}"),
        }
    }
}

/// Snapshot persistence settings, shared by the server and the CLI tools
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: PathBuf,
    pub key: String,
    pub database_url: Option<String>,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .parse()
            .context("STORAGE_BACKEND must be memory, file or postgres")?;

        let database_url = env::var("DATABASE_URL").ok();
        if backend == StorageBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORAGE_BACKEND=postgres");
        }

        Ok(Self {
            backend,
            path: env::var("STORAGE_PATH")
                .unwrap_or_else(|_| "next4us-storage.json".to_string())
                .into(),
            key: env::var("STORAGE_KEY").unwrap_or_else(|_| "next4us-storage".to_string()),
            database_url,
        })
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage: StorageConfig,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub admin_email: String,
    /// When set, the server seeds the administrator at startup
    pub admin_password: Option<String>,
    pub admin_phone: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            storage: StorageConfig::from_env()?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "next4us".to_string()),
            admin_email: admin_email_from_env(),
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty()),
            admin_phone: env::var("ADMIN_PHONE").unwrap_or_else(|_| "0700000000".to_string()),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
        })
    }
}

/// Reserved bootstrap administrator address
pub fn admin_email_from_env() -> String {
    env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@next4us.com".to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
