mod cmd;
mod pkg;
mod prelude;

use pkg::conf::settings;

#[tokio::main]
async fn main() {
    if let Err(err) = pkg::telemetry::init() {
        eprintln!("failed to initialize tracing: {}", err);
        return;
    }

    if let Err(err) = cmd::run().await {
        tracing::error!("error: {}", err);
    }

    if settings.use_telemetry {
        opentelemetry::global::shutdown_tracer_provider();
    }
}
