use crate::error::DashboardError;
use std::env;
use std::path::PathBuf;

/// Settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, DashboardError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LABOR_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());
        let output_dir = lookup("LABOR_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let seed = match lookup("LABOR_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                DashboardError::InvalidArgument(format!("LABOR_SEED '{raw}' is not a u64"))
            })?),
            None => None,
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            output_dir,
            seed,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}
