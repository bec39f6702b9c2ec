//! Wedding Invitation Core Library
//!
//! Event data and the interactive state behind a single-page wedding
//! invitation, independent of any UI framework.
//!
//! ## Overview
//!
//! A guest opens an invitation link. The page shows a sealed envelope; one
//! click starts the opening animation and the background music. Once the
//! envelope is open, the guest scrolls through the couple, families, date,
//! venue, schedule and a photo gallery with a lightbox.
//!
//! - [`EventData`]: the record being shown, with a JSON exchange format
//! - [`GalleryCursor`]: which image the lightbox shows, with wraparound
//! - [`AudioController`]: the single music handle; refused playback is
//!   logged and swallowed
//! - [`EntryGate`]: `Closed -> Opening -> Open`, timed on an injected [`Clock`]
//! - [`PageController`]: owns all of the above and routes user input
//! - [`EventEditor`]: draft editing and export of the event record
//!
//! ## Quick Start
//!
//! ```ignore
//! use invitation_core::{EventData, InviteConfig, PageController, SystemClock};
//!
//! let mut page = PageController::new(
//!     EventData::load("wedding_data.json")?,
//!     &InviteConfig::default(),
//!     "?k=Anna",
//!     Box::new(SystemClock),
//!     Box::new(|| my_backend()),
//! );
//! assert_eq!(page.guest_name(), Some("Anna"));
//! page.open_envelope();
//! ```

pub mod audio;
pub mod clock;
pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod gallery;
pub mod gate;
pub mod logging;
pub mod page;
pub mod query;

// Re-exports
pub use audio::{AudioController, PlayTicket, PlaybackBackend};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::InviteConfig;
pub use editor::{EventEditor, PhotoSlot, ScheduleField, TextField};
pub use error::{InviteError, InviteResult};
pub use event::{EventData, ScheduleEntry};
pub use gallery::GalleryCursor;
pub use gate::{EntryGate, GatePhase};
pub use page::{BackendFactory, NavKey, PageController};
pub use query::{guest_name_from_query, resolve_guest_name};
