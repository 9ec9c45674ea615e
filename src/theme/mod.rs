//! Global styles for Sheet Gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
