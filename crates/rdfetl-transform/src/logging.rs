//! Subscriber setup for hosts that run pipelines.
//!
//! Steps log through `tracing`. Each record runs inside a `record` span
//! carrying its batch index, so events can be traced back to the row that
//! produced them.
//!
//! - `warn`: unmapped coded values, just before the record fails
//! - `info`: batch summaries
//! - `debug`: per-step progress (minted IRIs, split counts, query rows)
//!
//! Field values are row-level source data. They only reach the log through
//! [`redact_value`], which hides them unless `log_data` is enabled.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Field values are shown only after [`init_logging_with_writer`] ran with
/// `log_data` set.
pub fn redact_value(value: &str) -> &str {
    if LOG_DATA_ENABLED.load(Ordering::Relaxed) {
        value
    } else {
        REDACTED_VALUE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human output without timestamps.
    #[default]
    Compact,
    /// One JSON object per event, including the enclosing `record` span.
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub format: LogFormat,
    pub ansi: bool,
    /// Emit an event when each `record` span closes, with its busy time.
    pub record_timings: bool,
    /// Whether record field values may be logged.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::default(),
            ansi: true,
            record_timings: false,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.ansi = enable;
        self
    }

    #[must_use]
    pub fn with_record_timings(mut self, enable: bool) -> Self {
        self.record_timings = enable;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.record_timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// `RUST_LOG` wins over the configured level; other crates stay at warn.
    fn env_filter(&self) -> EnvFilter {
        let level = self.level.as_str().to_lowercase();
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "warn,rdfetl_model={level},rdfetl_transform={level}"
            ))
        })
    }
}

/// Install the global subscriber writing to stderr.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) {
    init_logging_with_writer(config, io::stderr);
}

/// Install the global subscriber with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Relaxed);
    let registry = tracing_subscriber::registry().with(config.env_filter());
    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_span_events(config.span_events())
                    .with_writer(writer),
            )
            .init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_ansi(config.ansi)
                    .with_span_events(config.span_events())
                    .with_writer(writer),
            )
            .init(),
    }
}
