//! Configuration module for Dub Studio.
//!
//! Provides `DubbingConfig` (the user-editable dubbing settings), the
//! `ConfigUpdate` partial-merge record, `AppPaths` for cross-platform data
//! directories, and TOML persistence via `DubbingConfig::load` /
//! `DubbingConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{ConfigUpdate, DubbingConfig, VolumeBalance};
