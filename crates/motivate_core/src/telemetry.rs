//! Tracing and OpenTelemetry initialisation.

use opentelemetry::{global, trace::TracerProvider as _};
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};
use opentelemetry_stdout::{MetricExporter, SpanExporter};
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();
static METER_PROVIDER: OnceLock<SdkMeterProvider> = OnceLock::new();

/// Setting this variable exports spans and metrics to stdout in addition to
/// the log lines.
const OTEL_STDOUT_VAR: &str = "MOTIVATE_OTEL_STDOUT";

fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "debug"
    } else {
        "info,motivate=debug"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn stdout_meter_provider(resource: Resource) -> SdkMeterProvider {
    SdkMeterProvider::builder()
        .with_reader(PeriodicReader::builder(MetricExporter::default()).build())
        .with_resource(resource)
        .build()
}

/// Initialize tracing, optionally bridged to OpenTelemetry.
///
/// Log lines go through a fmt layer that respects `RUST_LOG`. When
/// `MOTIVATE_OTEL_STDOUT` is set, spans and metrics are also exported to
/// stdout through the OpenTelemetry stdout exporters, and the meter provider
/// is installed globally so provider metrics are recorded.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_telemetry(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let telemetry_layer = if std::env::var_os(OTEL_STDOUT_VAR).is_some() {
        let resource = Resource::builder().with_service_name("motivate").build();

        let meter_provider = stdout_meter_provider(resource.clone());
        global::set_meter_provider(meter_provider.clone());
        let _ = METER_PROVIDER.set(meter_provider);

        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_id_generator(RandomIdGenerator::default())
            .with_sampler(Sampler::AlwaysOn)
            .with_resource(resource)
            .build();
        let tracer = provider.tracer("motivate");
        let _ = TRACER_PROVIDER.set(provider);

        Some(
            tracing_opentelemetry::layer()
                .with_tracer(tracer)
                .with_filter(env_filter(verbose)),
        )
    } else {
        None
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(env_filter(verbose));

    tracing_subscriber::registry()
        .with(telemetry_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Flush pending spans and metrics and shut both providers down.
///
/// Call this before application exit. Does nothing when the OpenTelemetry
/// exporters were never enabled.
pub fn shutdown_telemetry() {
    if let Some(provider) = METER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "Failed to shut down meter provider");
        }
    }
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "Failed to shut down tracer provider");
        }
    }
}
