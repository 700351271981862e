use std::env;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let storage_dir =
            env::var("APP_STORAGE_DIR").unwrap_or_else(|_| ".listing-wizard".to_string());
        if storage_dir.trim().is_empty() {
            return Err(ConfigError::EmptyStorageDir);
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig {
                dir: PathBuf::from(storage_dir),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the draft store keeps its single persisted record.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Configuration failures surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_STORAGE_DIR is set but empty")]
    EmptyStorageDir,
}
