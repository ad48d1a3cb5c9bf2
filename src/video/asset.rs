//! The uploaded-video handle and its upload gate.
//!
//! Mirrors the studio's upload contract: a file is accepted only when its
//! MIME type starts with `video/`, and the asset does not exist until its
//! duration has been probed.  Replacing or removing an asset simply drops
//! the handle — the asset owns nothing beyond its path.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::probe::{probe_duration, ProbeError};

// ---------------------------------------------------------------------------
// UploadError
// ---------------------------------------------------------------------------

/// Errors surfaced to the user by the upload dropzone.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file's MIME type does not start with `video/`.
    #[error("Please upload a video file")]
    NotAVideo,

    /// Filesystem metadata could not be read.
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file looked like a video but its duration could not be probed.
    #[error("could not read video metadata: {0}")]
    Probe(#[from] ProbeError),
}

// ---------------------------------------------------------------------------
// VideoAsset
// ---------------------------------------------------------------------------

/// An accepted upload with its derived metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoAsset {
    /// Location of the media file; also stands in for the playable source
    /// handed to later pipeline stages.
    pub path: PathBuf,
    /// Duration in seconds, probed before the asset is considered uploaded.
    pub duration: f64,
    /// File size in bytes.
    pub size: u64,
    /// File name (no directory components).
    pub name: String,
}

impl VideoAsset {
    /// Accept a file as an upload.
    ///
    /// Rejects anything whose MIME type (derived from the extension) does
    /// not begin with `video/`, and fails if metadata or duration cannot be
    /// read — the caller's prior state is left untouched in every error
    /// case.
    pub fn open(path: &Path) -> Result<Self, UploadError> {
        if mime_type(path).is_none_or(|m| !m.starts_with("video/")) {
            return Err(UploadError::NotAVideo);
        }

        let meta = std::fs::metadata(path)?;
        let duration = probe_duration(path)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::info!(
            "video accepted: {} ({}, {})",
            name,
            format_duration(duration),
            format_file_size(meta.len())
        );

        Ok(Self {
            path: path.to_path_buf(),
            duration,
            size: meta.len(),
            name,
        })
    }

    /// Construct an asset from already-known metadata (tests, fixtures).
    pub fn from_parts(path: impl Into<PathBuf>, duration: f64, size: u64, name: &str) -> Self {
        Self {
            path: path.into(),
            duration,
            size,
            name: name.into(),
        }
    }

    /// The playable source as a string, threaded through pipeline artifacts.
    pub fn source(&self) -> String {
        self.path.display().to_string()
    }
}

// ---------------------------------------------------------------------------
// MIME detection
// ---------------------------------------------------------------------------

/// MIME type derived from the file extension.
///
/// Covers the container formats advertised in the dropzone copy plus the
/// other common video extensions; everything else is `None`.
fn mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => Some("video/mp4"),
        "mov" => Some("video/quicktime"),
        "avi" => Some("video/x-msvideo"),
        "webm" => Some("video/webm"),
        "mkv" => Some("video/x-matroska"),
        "mpg" | "mpeg" => Some("video/mpeg"),
        _ => None,
    }
}

/// Extensions offered to the file-dialog filter.
pub(crate) const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "avi", "webm", "mkv", "mpg", "mpeg"];

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// `95.0` → `"1:35"`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Bytes → `"512 B"` / `"1.5 KB"` / `"12.3 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_video_extension_is_rejected() {
        let err = VideoAsset::open(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, UploadError::NotAVideo));
    }

    #[test]
    fn missing_extension_is_rejected() {
        let err = VideoAsset::open(Path::new("mystery")).unwrap_err();
        assert!(matches!(err, UploadError::NotAVideo));
    }

    #[test]
    fn audio_file_is_rejected() {
        // `.mp3` maps to no video MIME type and must not pass the gate.
        let err = VideoAsset::open(Path::new("song.mp3")).unwrap_err();
        assert!(matches!(err, UploadError::NotAVideo));
    }

    #[test]
    fn extension_casing_is_ignored() {
        assert_eq!(mime_type(Path::new("CLIP.MP4")), Some("video/mp4"));
        assert_eq!(mime_type(Path::new("clip.MoV")), Some("video/quicktime"));
    }

    #[test]
    fn from_parts_preserves_metadata() {
        let asset = VideoAsset::from_parts("/tmp/demo.mp4", 25.0, 1_048_576, "demo.mp4");
        assert_eq!(asset.duration, 25.0);
        assert_eq!(asset.size, 1_048_576);
        assert_eq!(asset.name, "demo.mp4");
        assert_eq!(asset.source(), "/tmp/demo.mp4");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(9.7), "0:09");
        assert_eq!(format_duration(95.0), "1:35");
        assert_eq!(format_duration(3_605.0), "60:05");
    }

    #[test]
    fn file_size_formatting() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1_536), "1.5 KB");
        assert_eq!(format_file_size(12_897_484), "12.3 MB");
    }
}
