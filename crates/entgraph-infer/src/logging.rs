use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::errors::ConfigError;
use crate::options::LogOptions;

/// Install the global tracing subscriber.
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already set.
pub fn init_logging(options: &LogOptions) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(&options.level)
        .map_err(|err| ConfigError::Logging(err.to_string()))?;

    let result = if options.json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_timer(UtcTime::rfc_3339());
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    } else {
        let layer = tracing_subscriber::fmt::layer().with_timer(UtcTime::rfc_3339());
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    };

    result.map_err(|err| ConfigError::Logging(err.to_string()))
}
