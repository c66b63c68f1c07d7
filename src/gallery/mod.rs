// SPDX-License-Identifier: MPL-2.0
//! Image records shown by the carousel.
//!
//! A gallery is either the built-in demo set or a TOML file of the form:
//!
//! ```toml
//! [[images]]
//! id = 1
//! url = "https://picsum.photos/id/1018/1200/800"
//! uploaded_by = "Forest Wanderer"
//! upload_date = "2023-10-26"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Record identity, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// One displayable image with its caption data.
///
/// `upload_date` is shown verbatim and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: RecordId,
    pub url: String,
    pub uploaded_by: String,
    pub upload_date: String,
}

impl ImageRecord {
    pub fn new(
        id: impl Into<RecordId>,
        url: impl Into<String>,
        uploaded_by: impl Into<String>,
        upload_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            uploaded_by: uploaded_by.into(),
            upload_date: upload_date.into(),
        }
    }
}

/// A non-empty, ordered collection of image records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<ImageRecord>,
}

#[derive(Deserialize)]
struct GalleryFile {
    #[serde(default)]
    images: Vec<ImageRecord>,
}

impl Gallery {
    /// Builds a gallery, rejecting an empty record list.
    pub fn new(images: Vec<ImageRecord>) -> Result<Self> {
        if images.is_empty() {
            return Err(Error::Gallery("gallery contains no images".to_string()));
        }
        Ok(Self { images })
    }

    /// The five-image demo gallery shipped with the application.
    #[must_use]
    pub fn demo() -> Self {
        let images = [
            (1018, "Forest Wanderer", "2023-10-26"),
            (1015, "Mountain Explorer", "2023-10-25"),
            (1025, "City Photographer", "2023-10-24"),
            (1040, "Nature Lover", "2023-10-23"),
            (1050, "Coastal Adventurer", "2023-10-22"),
        ]
        .into_iter()
        .zip(1_i64..)
        .map(|((picsum_id, uploader, date), id)| {
            ImageRecord::new(
                id,
                format!("https://picsum.photos/id/{picsum_id}/1200/800"),
                uploader,
                date,
            )
        })
        .collect();

        Self { images }
    }

    /// Parses a gallery from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: GalleryFile =
            toml::from_str(content).map_err(|err| Error::Gallery(err.to_string()))?;
        Self::new(file.images)
    }

    /// Reads and parses a gallery file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns whether the gallery has no records; a constructed gallery never does.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.images.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn demo_gallery_has_five_records_in_order() {
        let gallery = Gallery::demo();
        assert_eq!(gallery.len(), 5);

        let first = gallery.get(0).expect("first record");
        assert_eq!(first.id, RecordId::Number(1));
        assert_eq!(first.url, "https://picsum.photos/id/1018/1200/800");
        assert_eq!(first.uploaded_by, "Forest Wanderer");
        assert_eq!(first.upload_date, "2023-10-26");

        let last = gallery.get(4).expect("last record");
        assert_eq!(last.id, RecordId::Number(5));
        assert_eq!(last.uploaded_by, "Coastal Adventurer");
        assert_eq!(last.upload_date, "2023-10-22");
    }

    #[test]
    fn parses_integer_and_string_ids() {
        let gallery = Gallery::from_toml_str(
            r#"
            [[images]]
            id = 7
            url = "https://example.com/a.jpg"
            uploaded_by = "Alice"
            upload_date = "2024-01-01"

            [[images]]
            id = "img-b"
            url = "file:///tmp/b.png"
            uploaded_by = "Bob"
            upload_date = "2024-01-02"
            "#,
        )
        .expect("valid gallery");

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.images()[0].id, RecordId::Number(7));
        assert_eq!(gallery.images()[1].id, RecordId::Text("img-b".to_string()));
        assert_eq!(gallery.images()[1].id.to_string(), "img-b");
    }

    #[test]
    fn empty_gallery_is_rejected() {
        assert!(matches!(
            Gallery::from_toml_str("images = []"),
            Err(Error::Gallery(_))
        ));
        assert!(matches!(Gallery::from_toml_str(""), Err(Error::Gallery(_))));
        assert!(matches!(Gallery::new(Vec::new()), Err(Error::Gallery(_))));
    }

    #[test]
    fn record_missing_fields_is_rejected() {
        let result = Gallery::from_toml_str("[[images]]\nid = 1\nurl = \"x\"\n");
        assert!(matches!(result, Err(Error::Gallery(_))));
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gallery.toml");
        fs::write(
            &path,
            "[[images]]\nid = 1\nurl = \"a.png\"\nuploaded_by = \"Me\"\nupload_date = \"today\"\n",
        )
        .expect("write gallery");

        let gallery = Gallery::load_from_path(&path).expect("load gallery");
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = Gallery::load_from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
