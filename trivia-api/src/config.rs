use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl ApiConfig {
    /// Layers defaults, the config file and `TRIVIA_API__*` environment
    /// variables. An explicitly given file must exist; the default one is
    /// optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config_path, required) = match explicit_path {
            Some(path) => (path.to_path_buf(), true),
            None => (get_config_path(), false),
        };

        // Defaults first, then the file, then environment overrides
        let builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default(
                "database.path",
                get_default_db_path().to_string_lossy().to_string(),
            )?
            .set_default("storage.backend", "sqlite")?
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("logging.level", "info")?
            .add_source(File::from(config_path).required(required))
            // e.g. TRIVIA_API__SERVER__PORT=8080
            .add_source(Environment::with_prefix("TRIVIA_API").separator("__"))
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        // Expand tilde in database and log paths
        config.database.path = expand_tilde(&config.database.path);
        config.logging.file = config.logging.file.as_deref().map(expand_tilde);

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("trivia/api.toml")
    } else {
        PathBuf::from("trivia-api.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("trivia/trivia.db")
    } else {
        PathBuf::from("trivia.db")
    }
}
