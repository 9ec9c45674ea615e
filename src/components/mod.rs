//! UI Components for Sheet Gallery.

mod boot_screen;
mod gallery_grid;
mod lightbox;

pub use boot_screen::BootScreen;
pub use gallery_grid::GalleryGrid;
pub use lightbox::Lightbox;
