use thiserror::Error;

/// Feil ved lasting/validering av samplingskonfig.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("unknown activity `{0}` (expected `cycling` or `running`)")]
    UnknownActivity(String),
}

/// Feil på JSON-grensesnittet (api / Python-binding).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid timestamp at points[{index}]: {reason}")]
    Timestamp { index: usize, reason: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
