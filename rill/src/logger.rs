//! Console logging.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Records emitted
/// through the `log` facade by the library crates are forwarded into it.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false));

    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    log::debug!("Logger initialized");
    Ok(())
}
