//! Error type shared by the library and the binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A caller-supplied parameter is outside its domain (e.g. zero contracts,
    /// an unknown city name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An aggregate that needs at least one record was asked for over none.
    #[error("no contracts match the current filters")]
    EmptyInput,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
