//! Dubbing pipeline: state machine, driver, and mock data generators.
//!
//! # Architecture
//!
//! ```text
//! PipelineCommand (mpsc)
//!        │
//!        ▼
//! PipelineDriver::run()  ← async tokio task
//!        │
//!        └─ StartDubbing
//!             extracting ▶ transcribing ▶ translating ▶ synthesizing
//!             ▶ mixing ▶ complete    (fixed sleeps between emissions)
//!        │
//!        ▼
//! PipelineState snapshots (mpsc) ─── drained by egui update() each frame
//! ```
//!
//! The driver owns all pipeline logic; the UI is a stateless subscriber that
//! renders whatever snapshot it last received.

pub mod driver;
pub mod sim;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use driver::{PipelineCommand, PipelineDriver, FAILURE_MESSAGE};
pub use state::{
    AudioTrack, PipelineState, PipelineStatus, PipelineStep, ProcessingData, Transcription,
    TranscriptionSegment, Translation, TranslationSegment, TrackKind,
};
