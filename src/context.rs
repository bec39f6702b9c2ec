//! Launch settings and the page controller context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| page);
//!
//! // In child components
//! let mut page = use_page();
//! page.write().toggle_music();
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

use dioxus::prelude::*;
use invitation_core::{EventData, InviteConfig, PageController};

/// Everything `main` resolved before the window opened
#[derive(Debug, Clone)]
pub struct LaunchContext {
    pub event: EventData,
    pub config: InviteConfig,
    /// Incoming query string (or link) for the guest name
    pub query: String,
    /// Whether the content editor is reachable
    pub editing_enabled: bool,
    /// Initial folder for the export dialog
    pub export_dir: Option<PathBuf>,
}

static LAUNCH: OnceLock<LaunchContext> = OnceLock::new();

/// Store the launch settings. Only the first call has an effect.
pub fn set_launch_context(ctx: LaunchContext) {
    let _ = LAUNCH.set(ctx);
}

/// Launch settings, or defaults when started without `main` (e.g. hot reload)
pub fn launch_context() -> LaunchContext {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchContext {
        event: EventData::default(),
        config: InviteConfig::default(),
        query: String::new(),
        editing_enabled: false,
        export_dir: None,
    })
}

/// Hook to access the page controller from context.
pub fn use_page() -> Signal<PageController> {
    use_context::<Signal<PageController>>()
}

/// Hook to access the launch settings from context.
pub fn use_launch() -> LaunchContext {
    use_context::<LaunchContext>()
}
