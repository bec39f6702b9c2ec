//! Reusable UI components for the invitation page

mod button;
mod emblem;
mod section;

pub use button::*;
pub use emblem::*;
pub use section::*;
