//! Media duration probing via an `ffprobe` subprocess.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors that can occur while probing a media file.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// `ffprobe` could not be launched (likely not installed).
    #[error("failed to run ffprobe: {0}")]
    Spawn(#[from] std::io::Error),

    /// `ffprobe` ran but produced no parseable duration.
    #[error("could not read duration from {0}")]
    Unreadable(String),
}

/// Probe the duration of a media file in seconds.
///
/// Shells out to `ffprobe`, asking for the container-level duration only.
pub fn probe_duration(path: &Path) -> Result<f64, ProbeError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()?;

    let duration_str = String::from_utf8_lossy(&output.stdout);
    duration_str
        .trim()
        .parse::<f64>()
        .map_err(|_| ProbeError::Unreadable(path.display().to_string()))
}
