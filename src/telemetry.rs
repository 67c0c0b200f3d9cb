use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::Tracer;
use secrecy::ExposeSecret;
use tonic::metadata::{AsciiMetadataKey, MetadataMap};
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::configuration::TelemetrySettings;

/// Installs the global subscriber: env filter, a fmt layer writing to `sink`, and the OTLP
/// exporter when enabled. `RUST_LOG` overrides `env_filter`.
pub fn init_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
    settings: &TelemetrySettings,
) -> anyhow::Result<()>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    LogTracer::init()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = fmt::layer().with_target(false).with_writer(sink);

    let registry = Registry::default().with(env_filter).with(formatting_layer);
    match telemetry_layer(settings)? {
        Some(open_telemetry_tracer) => {
            let telemetry_layer = tracing_opentelemetry::layer().with_tracer(open_telemetry_tracer);
            set_global_default(registry.with(telemetry_layer))?;
        }
        None => set_global_default(registry)?,
    }
    tracing::debug!(service = %name, "Tracing initialised");
    Ok(())
}

pub fn telemetry_layer(settings: &TelemetrySettings) -> anyhow::Result<Option<Tracer>> {
    if !settings.enabled {
        return Ok(None);
    }
    let mut meta_data = MetadataMap::new();
    let key = AsciiMetadataKey::from_bytes(settings.api_key_header.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to parse telemetry api key header: {e}"))?;
    meta_data.insert(
        key,
        settings
            .api_key
            .expose_secret()
            .parse()
            .map_err(|e| anyhow::anyhow!("Failed to parse telemetry api key: {e}"))?,
    );
    let open_telemetry_tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_metadata(meta_data)
                .with_endpoint(&settings.endpoint)
                .with_tls_config(Default::default()),
        )
        .install_batch(opentelemetry_sdk::runtime::Tokio)?;
    Ok(Some(open_telemetry_tracer))
}
