//! Page components for Sheet Gallery.

mod gallery;

pub use gallery::GalleryPage;
