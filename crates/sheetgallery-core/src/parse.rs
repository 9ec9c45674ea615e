//! CSV parsing for published sheets.
//!
//! The first row names the fields; every later non-blank row is a record.
//! Column order is free and unknown columns are ignored, so a sheet owner
//! can add notes columns without breaking the gallery.

use csv::{ReaderBuilder, StringRecord};

use crate::error::GalleryResult;
use crate::types::ArchiveImage;

const ID_FIELD: &str = "id";
const IMAGE_URL_FIELD: &str = "image_url";

/// Column indexes resolved from the header row.
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    id: Option<usize>,
    image_url: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut columns = Self::default();
        for (i, name) in headers.iter().enumerate() {
            let name = name.trim().to_ascii_lowercase();
            // First matching column wins, like a keyed row object would
            if name == ID_FIELD && columns.id.is_none() {
                columns.id = Some(i);
            } else if name == IMAGE_URL_FIELD && columns.image_url.is_none() {
                columns.image_url = Some(i);
            }
        }
        columns
    }

    fn record(&self, row: &StringRecord) -> ArchiveImage {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(str::to_string)
                .unwrap_or_default()
        };
        ArchiveImage {
            id: cell(self.id),
            image_url: cell(self.image_url),
        }
    }
}

/// Separator-only rows count as blank lines; whitespace is content.
fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(str::is_empty)
}

/// Parse header-delimited CSV text into records, in row order.
///
/// Missing cells and missing columns become empty strings. Rows with an
/// empty `image_url` are kept here; filtering happens at display time.
pub fn parse_records(text: &str) -> GalleryResult<Vec<ArchiveImage>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = Columns::from_headers(reader.headers()?);
    if columns.image_url.is_none() {
        tracing::warn!("Sheet has no '{}' column; no images will be shown", IMAGE_URL_FIELD);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if is_blank(&row) {
            continue;
        }
        records.push(columns.record(&row));
    }

    tracing::debug!("Parsed {} records", records.len());
    Ok(records)
}
