use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::wizard::domain::UnknownPropertyType;
use crate::wizard::store::DraftStoreError;
use crate::wizard::WizardError;

/// Top-level error for the CLI binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("draft storage error: {0}")]
    Store(#[from] DraftStoreError),
    #[error("wizard error: {0}")]
    Wizard(#[from] WizardError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    PropertyType(#[from] UnknownPropertyType),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
