//! Dub Studio — desktop video dubbing studio (egui).
//!
//! Simulates a five-stage dubbing pipeline over an uploaded video: audio
//! extraction, transcription, translation, voice synthesis, and final mixing.
//! The pipeline runs as a tokio task and streams complete state snapshots to
//! the UI over a channel; the UI renders whatever it last received.
//!
//! # Modules
//!
//! * [`app`]       — the eframe application (upload, config, tracker, preview)
//! * [`config`]    — persisted dubbing settings (TOML)
//! * [`language`]  — the supported-language catalog
//! * [`pipeline`]  — pipeline state machine, driver, and mock generators
//! * [`subtitle`]  — cue selection and SRT rendering
//! * [`translate`] — the pluggable translation seam
//! * [`video`]     — upload gating and duration probing

pub mod app;
pub mod config;
pub mod language;
pub mod pipeline;
pub mod subtitle;
pub mod translate;
pub mod video;
