//! Visual theme: imperial red, gold and cream paper.

mod styles;

pub use styles::GLOBAL_STYLES;
