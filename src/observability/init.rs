//! Subscriber setup: `tracing` → OpenTelemetry → OTLP JSON file.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace output inside the data directory.
pub const TRACE_FILE: &str = "keylist-otlp.json";

const SERVICE_NAME: &str = "keylist";

/// Installs the global subscriber when `config.trace_level` is set.
///
/// Traces go to `<data dir>/keylist-otlp.json`. Tracing is optional: if the
/// directory cannot be created or a subscriber is already installed, this
/// returns without doing anything.
///
/// ```no_run
/// use keylist::observability::init_tracing;
/// use keylist::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let Some(level) = config.trace_level.as_deref() else {
        return;
    };

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(exporter::SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
