use opentelemetry::{KeyValue, global, trace::TracerProvider as _};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    pkg::conf::settings,
    prelude::{Error, Result},
};

/// Installs the global subscriber: fmt output always, OTLP trace export
/// layered in when USE_TELEMETRY is set.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer();

    if settings.use_telemetry {
        let endpoint = format!("http://{}:{}", settings.otlp_host, settings.otlp_port);
        let provider = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(opentelemetry_otlp::new_exporter().tonic().with_endpoint(endpoint))
            .with_trace_config(sdktrace::Config::default().with_resource(Resource::new(vec![
                KeyValue::new("service.name", "samplefn"),
            ])))
            .install_batch(runtime::Tokio)
            .map_err(|err| Error::Telemetry(err.to_string()))?;
        global::set_tracer_provider(provider.clone());
        let tracer = provider.tracer("samplefn");
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt_layer).init();
    }
    Ok(())
}
