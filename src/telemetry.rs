use crate::config::TelemetryConfig;
use crate::error::DashboardError;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` wins over the configured level.
/// Logs go to stderr so console tables and prompts stay readable.
pub fn init(config: &TelemetryConfig) -> Result<(), DashboardError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|err| {
            DashboardError::Telemetry(format!(
                "invalid log level/filter '{}': {err}",
                config.log_level
            ))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| DashboardError::Telemetry(err.to_string()))
}
