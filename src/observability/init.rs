//! Tracing initialization and subscriber setup.

use super::exporter::{create_tracer_provider, SCOPE_NAME};
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file created inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "catalog-otlp.json";

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to the trace file.
///
/// The filter comes from `config.trace_level` (an `EnvFilter` directive such
/// as `debug` or `book_catalog=trace`), defaulting to `info`. Observability is
/// optional: when the data directory cannot be created nothing is installed,
/// and calling this more than once keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SCOPE_NAME)]);
    let provider = create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(level, "tracing initialized");
    }
}
