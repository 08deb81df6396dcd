use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, filter::Directive, fmt, prelude::*};

/// Keeps the file writer flushing until dropped; hold it for the life of `main`.
pub struct Logger {
    _guard: WorkerGuard,
    _provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = if is_dev {
            None
        } else {
            Some(SdkLoggerProvider::builder().build())
        };

        if let Some(provider) = &provider {
            let otel_filter = ["hyper", "hyper_util", "reqwest", "h2", "opentelemetry"]
                .iter()
                .filter_map(|target| format!("{target}=off").parse::<Directive>().ok())
                .fold(EnvFilter::new("info"), |filter, directive| {
                    filter.add_directive(directive)
                });

            registry
                .with(OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter))
                .init();
        } else {
            registry.init();
        }

        Self {
            _guard: guard,
            _provider: provider,
        }
    }
}
