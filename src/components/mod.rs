//! UI Components for the invitation page.

mod details;
mod edit_modal;
mod envelope;
mod falling_effects;
mod families;
mod gallery;
mod header;
mod lightbox;
mod toolbar;

pub use details::EventDetails;
pub use edit_modal::EditModal;
pub use envelope::Envelope;
pub use falling_effects::FallingEffects;
pub use families::Families;
pub use gallery::Gallery;
pub use header::CoupleHeader;
pub use lightbox::Lightbox;
pub use toolbar::Toolbar;
