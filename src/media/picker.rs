//! File picking and reading
//!
//! The native dialog only hints at image types; whatever file the user
//! picks is read in full and encoded.

use std::path::PathBuf;
use tracing::{debug, info};

use super::DataUri;
use crate::error::{Error, Result};

/// Extensions offered by the picker's "Images" filter
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// The picker's retained value
///
/// Picking the file that is already selected raises no change, like an
/// HTML file input. `clear` forgets the selection so the same file can be
/// picked again after a reset.
#[derive(Debug, Default)]
pub struct FileSelection {
    retained: Option<PathBuf>,
}

impl FileSelection {
    /// Record a picked path. Returns the path when it is a change.
    pub fn accept(&mut self, path: PathBuf) -> Option<PathBuf> {
        if self.retained.as_ref() == Some(&path) {
            debug!(path = %path.display(), "Same file picked again, ignoring");
            return None;
        }
        self.retained = Some(path.clone());
        Some(path)
    }

    pub fn clear(&mut self) {
        self.retained = None;
    }
}

/// Show the native open dialog. Resolves to `None` when cancelled.
pub async fn pick_image() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Select an image for your case")
        .add_filter("Images", &IMAGE_EXTENSIONS[..])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Read a whole file and encode it as a data URI
pub async fn read_image(path: PathBuf) -> Result<DataUri> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| Error::read(&path, e))?;

    let uri = DataUri::from_bytes(&bytes, Some(&path));
    info!(
        path = %path.display(),
        bytes = bytes.len(),
        mime = uri.mime(),
        "Loaded image"
    );
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_same_path_is_not_a_change() {
        let mut selection = FileSelection::default();
        let path = PathBuf::from("/photos/cat.png");

        assert_eq!(selection.accept(path.clone()), Some(path.clone()));
        assert_eq!(selection.accept(path.clone()), None);
        assert_eq!(selection.retained, Some(path));
    }

    #[test]
    fn test_clear_allows_reselecting() {
        let mut selection = FileSelection::default();
        let path = PathBuf::from("/photos/cat.png");

        selection.accept(path.clone());
        selection.clear();
        assert!(selection.retained.is_none());
        assert_eq!(selection.accept(path.clone()), Some(path));
    }

    #[test]
    fn test_different_path_is_a_change() {
        let mut selection = FileSelection::default();
        selection.accept(PathBuf::from("a.png"));
        assert_eq!(
            selection.accept(PathBuf::from("b.png")),
            Some(PathBuf::from("b.png"))
        );
    }

    #[tokio::test]
    async fn test_read_image_encodes_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("case.png");
        let bytes = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
        fs::write(&path, bytes).expect("failed to write fixture");

        let uri = read_image(path).await.expect("read should succeed");
        assert_eq!(uri.mime(), "image/png");
        assert_eq!(uri.decode().unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.png");

        let err = read_image(path.clone()).await.unwrap_err();
        assert!(matches!(err, Error::Read { path: p, .. } if p == path));
    }
}
