use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing and logging.
///
/// Log level comes from `RUST_LOG` when set, otherwise from configuration.
/// The `format` setting selects structured JSON (production) or pretty
/// console output (development).
pub fn init_observability(logging: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        level = %logging.level,
        format = %logging.format,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_completes_with_defaults() {
        let result = init_observability(&LoggingConfig::default());
        // A second init in the same process returns Err from try_init, which
        // is fine for this smoke test as long as the first call succeeded.
        if let Err(err) = result {
            assert!(err.to_string().contains("global default"), "{err}");
        }
    }
}
