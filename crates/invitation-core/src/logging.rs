//! Tracing subscriber setup.
//!
//! Console output through `tracing_subscriber::fmt`, filtered by `RUST_LOG`
//! when set, otherwise by the builder's filter.
//!
//! ```ignore
//! use invitation_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("invitation=debug,invitation_core=debug")
//!     .init();
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the builder sets one
pub const DEFAULT_FILTER: &str = "invitation=info,invitation_core=info";

/// Builder for the process-wide tracing subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    with_target: bool,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive (e.g., "invitation=info,invitation_core=debug").
    /// `RUST_LOG` still takes precedence.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Include the event target (module path) in console lines.
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Resolve the filter: `RUST_LOG`, then the builder's, then the default.
    pub fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER);
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        })
    }

    /// Install as the global subscriber. Returns `false` if one was already set.
    pub fn init(self) -> bool {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(self.with_target);
        tracing_subscriber::registry()
            .with(self.build_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
    }
}
