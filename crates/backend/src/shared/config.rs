use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding `auth.jwt_secret`
pub const JWT_SECRET_ENV: &str = "JOBSEARCH_JWT_SECRET";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "target/db/jobsearch.db"

[auth]
jwt_secret = ""
"#;

impl Config {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return Config::from_toml(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Config::from_toml(DEFAULT_CONFIG)
}

/// Get the database file path from configuration.
/// Relative paths are resolved against the executable directory.
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(&config.database.path))
}

/// Resolve the token verification secret: environment first, then config.
pub fn get_jwt_secret(config: &Config) -> anyhow::Result<String> {
    pick_jwt_secret(std::env::var(JWT_SECRET_ENV).ok(), config)
}

fn pick_jwt_secret(from_env: Option<String>, config: &Config) -> anyhow::Result<String> {
    let secret = from_env
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| config.auth.jwt_secret.clone());
    if secret.trim().is_empty() {
        anyhow::bail!(
            "JWT secret is not configured: set auth.jwt_secret in config.toml or {}",
            JWT_SECRET_ENV
        );
    }
    Ok(secret)
}
