//! Wedding Invitation UI Components
//!
//! Dioxus components in the invitation's visual language: deep red paper,
//! gold trim, cream text.
//!
//! ## Design Notes
//!
//! - **Red (#8b0000)**: envelope panels, card backgrounds
//! - **Gold (#ffd700)**: titles, borders, the 囍 seal
//! - **Cream (#fdf5e6)**: body text, the date/location card
//!
//! The components carry class names only; the stylesheet lives with the
//! desktop app.

pub mod components;

pub use components::*;
