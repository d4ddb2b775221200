//! The video file picked by the user.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{ModelError, ModelResult};

const FALLBACK_MIME: &str = "application/octet-stream";
const FALLBACK_FILE_NAME: &str = "video";

/// An opaque video blob plus the metadata the upload needs.
///
/// The bytes sit behind an `Arc`, so cloning the selection into a request
/// snapshot is cheap. Building the multipart body still copies them once.
/// A new selection replaces the whole value; it is never mutated in place.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedVideo {
    file_name: String,
    mime_type: String,
    data: Arc<[u8]>,
}

impl SelectedVideo {
    /// Build from bytes already in memory.
    ///
    /// The MIME type is sniffed from the content.
    pub fn from_bytes(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let data: Vec<u8> = data.into();
        let mime_type = sniff_mime(&data);
        Self {
            file_name: file_name.into(),
            mime_type,
            data: Arc::from(data),
        }
    }

    /// Build with an explicit MIME type, skipping detection.
    pub fn with_mime(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        let data: Vec<u8> = data.into();
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: Arc::from(data),
        }
    }

    /// Read a file from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let metadata = match tokio::fs::metadata(path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ModelError::FileNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(ModelError::NotAFile(path.to_path_buf()));
        }

        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

        let video = Self::from_bytes(file_name, data);
        debug!(
            file = %video.file_name,
            mime = %video.mime_type,
            bytes = video.len(),
            "Loaded video file"
        );
        Ok(video)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the MIME type matches the picker's `video/*` filter.
    ///
    /// Advisory only; nothing rejects a file that fails this check.
    pub fn looks_like_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }
}

// Keep the blob out of debug output.
impl fmt::Debug for SelectedVideo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedVideo")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

fn sniff_mime(data: &[u8]) -> String {
    infer::get(data)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ISO base media header with an "isom" brand.
    const MP4_HEADER: [u8; 12] = [
        0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'i', b's', b'o', b'm',
    ];

    #[test]
    fn test_sniffs_mp4() {
        let video = SelectedVideo::from_bytes("clip.mp4", MP4_HEADER.to_vec());
        assert_eq!(video.mime_type(), "video/mp4");
        assert!(video.looks_like_video());
    }

    #[test]
    fn test_unknown_content_is_accepted() {
        let video = SelectedVideo::from_bytes("notes.txt", b"hello".to_vec());
        assert_eq!(video.mime_type(), FALLBACK_MIME);
        assert!(!video.looks_like_video());
        assert_eq!(video.len(), 5);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let video = SelectedVideo::with_mime("a.mp4", "video/mp4", vec![1, 2, 3]);
        let debug = format!("{:?}", video);
        assert!(debug.contains("a.mp4"));
        assert!(debug.contains("len: 3"));
    }

    #[tokio::test]
    async fn test_from_path() {
        let mut file = tempfile::Builder::new()
            .suffix(".mp4")
            .tempfile()
            .unwrap();
        file.write_all(&MP4_HEADER).unwrap();

        let video = SelectedVideo::from_path(file.path()).await.unwrap();
        assert!(video.file_name().ends_with(".mp4"));
        assert_eq!(video.mime_type(), "video/mp4");
        assert_eq!(video.data(), &MP4_HEADER);
    }

    #[tokio::test]
    async fn test_from_missing_path() {
        let err = SelectedVideo::from_path("/definitely/not/here.mp4")
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedVideo::from_path(dir.path()).await.unwrap_err();
        assert!(matches!(err, ModelError::NotAFile(_)));
    }
}
