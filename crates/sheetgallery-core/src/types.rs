//! Record types parsed from the sheet.

use serde::Serialize;

/// One row of the published sheet.
///
/// Neither field is validated: `id` is an opaque label that may repeat, and
/// `image_url` is handed to the renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveImage {
    pub id: String,
    pub image_url: String,
}

impl ArchiveImage {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
        }
    }

    /// Whether the record gets a tile. Only an empty URL is filtered.
    pub fn is_displayable(&self) -> bool {
        !self.image_url.is_empty()
    }
}

/// A displayable record together with its row position.
///
/// The position indexes the full parsed list (hidden rows included) and is
/// what selection is keyed on, since ids are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub position: usize,
    pub id: String,
    pub image_url: String,
}

impl Tile {
    pub fn from_record(position: usize, record: &ArchiveImage) -> Self {
        Self {
            position,
            id: record.id.clone(),
            image_url: record.image_url.clone(),
        }
    }
}

/// Displayable records in row order.
pub fn tiles_for(records: &[ArchiveImage]) -> Vec<Tile> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_displayable())
        .map(|(i, r)| Tile::from_record(i, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_not_displayable() {
        assert!(!ArchiveImage::new("002", "").is_displayable());
        assert!(ArchiveImage::new("001", "http://x/a.png").is_displayable());
    }

    #[test]
    fn test_whitespace_url_is_kept() {
        // Cells are taken verbatim; only the empty string is hidden
        assert!(ArchiveImage::new("004", " ").is_displayable());
    }

    #[test]
    fn test_tiles_keep_row_positions() {
        let records = vec![
            ArchiveImage::new("001", "http://x/a.png"),
            ArchiveImage::new("002", ""),
            ArchiveImage::new("003", "http://x/c.png"),
        ];
        let tiles = tiles_for(&records);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].position, 0);
        assert_eq!(tiles[1].position, 2);
        assert_eq!(tiles[1].id, "003");
    }
}
