//! Video asset handling: upload gating, metadata, duration probing.
//!
//! [`VideoAsset`] wraps a user-selected media file with derived metadata
//! (duration, size, name).  An asset is not considered uploaded until its
//! duration is known — [`VideoAsset::open`] probes it before returning.

pub mod asset;
pub mod probe;

pub use asset::{format_duration, format_file_size, UploadError, VideoAsset};
pub use probe::{probe_duration, ProbeError};
