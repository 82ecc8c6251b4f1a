//! Tracing subscriber setup and runtime log-level control.
//!
//! The binary installs one global subscriber at startup. The `EnvFilter` sits
//! behind a reload layer so the level can be changed while the server runs
//! (`PUT /api/v1/admin/log-level`).

use std::sync::Arc;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("failed to reload log filter: {0}")]
    Reload(#[from] reload::Error),

    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Cloneable handle for swapping the active log filter.
#[derive(Clone)]
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    // Keeps the filter layer alive when the subscriber is not installed globally.
    _detached: Option<Arc<dyn Subscriber + Send + Sync>>,
}

impl LogLevelHandle {
    /// Builds a handle backed by a subscriber that is never installed.
    ///
    /// Filter changes are accepted and reported back but affect no output.
    pub fn detached(directive: &str) -> Result<Self, TelemetryError> {
        let (filter, handle) = reload::Layer::new(parse_filter(directive)?);
        let subscriber = tracing_subscriber::registry().with(filter);

        Ok(Self {
            handle,
            _detached: Some(Arc::new(subscriber)),
        })
    }

    /// Replaces the active filter with `directive` (`debug`, `blog_backend=trace,info`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFilter`] if the directive cannot be parsed.
    pub fn set_level(&self, directive: &str) -> Result<(), TelemetryError> {
        let filter = parse_filter(directive)?;
        self.handle.reload(filter)?;
        tracing::info!(filter = directive, "log level changed");
        Ok(())
    }

    /// Returns the active filter rendered as directives.
    pub fn current(&self) -> Option<String> {
        self.handle.with_current(|filter| filter.to_string()).ok()
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::InvalidFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Installs the global subscriber.
///
/// `log_level` seeds the filter and `log_format` selects `text` or `json` output.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init(log_level: &str, log_format: &str) -> Result<LogLevelHandle, TelemetryError> {
    let (filter, handle) = reload::Layer::new(parse_filter(log_level)?);
    let json = log_format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .try_init()?;

    Ok(LogLevelHandle {
        handle,
        _detached: None,
    })
}
