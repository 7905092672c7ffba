//! Tracing subscriber setup. The library only emits events; the binary
//! decides where they go.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// How events are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// The message only. Used by default so diagnostics read as plain lines.
    Plain,
    /// Level and target with every message.
    Compact,
}

/// Tracing configuration builder.
#[derive(Debug)]
pub struct TracingConfig {
    /// Verbosity level (maps to log levels).
    pub verbosity: u8,
    /// Environment filter string (overrides verbosity if set).
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            env_filter: std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        }
    }
}

impl TracingConfig {
    /// Create a new tracing configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity level (0-2+).
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Convert verbosity level to tracing filter string.
    pub fn verbosity_to_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",  // Default: diagnostics only
            1 => "debug", // -v: chosen mode, counts and results
            _ => "trace", // -vv: every parsed or skipped literal
        }
    }

    /// Bare messages by default, levels and targets once verbose.
    pub fn format(&self) -> TracingFormat {
        if self.verbosity == 0 {
            TracingFormat::Plain
        } else {
            TracingFormat::Compact
        }
    }

    /// Initialize tracing subscriber based on configuration.
    pub fn init(self) -> Result<()> {
        let filter = match &self.env_filter {
            Some(env_filter) => EnvFilter::try_new(env_filter)?,
            None => EnvFilter::try_new(self.verbosity_to_filter())?,
        };

        let registry = Registry::default().with(filter);

        match self.format() {
            TracingFormat::Plain => {
                let fmt_layer = fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .without_time()
                    .with_target(false)
                    .with_level(false);

                registry.with(fmt_layer).try_init()?;
            }
            TracingFormat::Compact => {
                let fmt_layer = fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .compact();

                registry.with(fmt_layer).try_init()?;
            }
        }

        Ok(())
    }
}
