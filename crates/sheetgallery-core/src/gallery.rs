//! Gallery page state.
//!
//! A plain container with explicit setters, owned by whichever surface is
//! showing the gallery. Loading and selection live here; the record list is
//! replaced wholesale on load and otherwise never changes.

use crate::error::GalleryResult;
use crate::types::{tiles_for, ArchiveImage, Tile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    loading: bool,
    records: Vec<ArchiveImage>,
    /// Position into `records` of the record shown in the lightbox
    selected: Option<usize>,
}

impl GalleryState {
    /// Fresh page: loading, no records, nothing selected.
    pub fn new() -> Self {
        Self {
            loading: true,
            records: Vec::new(),
            selected: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Every parsed record, including ones without an image.
    pub fn records(&self) -> &[ArchiveImage] {
        &self.records
    }

    /// Store a finished load.
    pub fn finish_load(&mut self, records: Vec<ArchiveImage>) {
        self.records = records;
        self.loading = false;
        self.selected = None;
    }

    /// A failed load shows an empty, settled gallery.
    pub fn fail_load(&mut self) {
        self.finish_load(Vec::new());
    }

    /// Apply a loader result, logging failures.
    pub fn apply(&mut self, result: GalleryResult<Vec<ArchiveImage>>) {
        match result {
            Ok(records) => self.finish_load(records),
            Err(e) => {
                tracing::error!("Gallery load failed: {}", e);
                self.fail_load();
            }
        }
    }

    /// Displayable records in sheet order.
    pub fn tiles(&self) -> Vec<Tile> {
        tiles_for(&self.records)
    }

    /// Loading finished and there is nothing to show.
    pub fn is_empty_after_load(&self) -> bool {
        !self.loading && !self.records.iter().any(ArchiveImage::is_displayable)
    }

    /// Open the lightbox on the record at `position`.
    ///
    /// Returns false (and leaves the selection alone) if the position is out
    /// of range or the record has no image.
    pub fn select(&mut self, position: usize) -> bool {
        match self.records.get(position) {
            Some(record) if record.is_displayable() => {
                self.selected = Some(position);
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self) -> Option<&ArchiveImage> {
        self.selected.and_then(|i| self.records.get(i))
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.selected
    }

    /// Close the lightbox.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}
