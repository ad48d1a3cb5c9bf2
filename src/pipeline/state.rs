//! Pipeline state machine data: steps, statuses, the state snapshot, and the
//! accumulating result payload.
//!
//! [`PipelineState`] is the single session-state object the driver emits and
//! the UI renders.  The state machine is:
//!
//! ```text
//! Upload ──accepted──▶ Configure ──start──▶ Extracting ▶ Transcribing
//!        ▶ Translating ▶ Synthesizing ▶ Mixing ▶ Complete
//! any processing stage ──failure──▶ status = Error (absorbing)
//! ```
//!
//! `step` only advances forward; `progress` resets to 0 when a stage begins
//! and reaches 100 before the stage is marked complete.  `data` accumulates
//! monotonically — once a stage's output appears it is never removed or
//! replaced by later emissions.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PipelineStep
// ---------------------------------------------------------------------------

/// Ordered stages of the dubbing session.
///
/// `Upload` and `Configure` are pre-pipeline UI phases; the five processing
/// stages plus `Complete` form the simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PipelineStep {
    /// No video selected yet.
    Upload,
    /// Video accepted; waiting for the user to start the run.
    Configure,
    /// Separating voice, music and effects tracks.
    Extracting,
    /// Converting speech to text.
    Transcribing,
    /// Translating the transcript to the target language.
    Translating,
    /// Cloning the voice and generating dubbed audio.
    Synthesizing,
    /// Combining all audio tracks into the final video.
    Mixing,
    /// The dubbed video is ready.
    Complete,
}

impl PipelineStep {
    /// Short label for the step tracker.
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStep::Upload => "Upload",
            PipelineStep::Configure => "Configure",
            PipelineStep::Extracting => "Audio Extraction",
            PipelineStep::Transcribing => "Transcription",
            PipelineStep::Translating => "Translation",
            PipelineStep::Synthesizing => "Voice Synthesis",
            PipelineStep::Mixing => "Audio Mixing",
            PipelineStep::Complete => "Complete",
        }
    }

    /// One-line description shown under the label in the step tracker.
    pub fn description(&self) -> &'static str {
        match self {
            PipelineStep::Upload => "Select a video to dub",
            PipelineStep::Configure => "Choose languages and options",
            PipelineStep::Extracting => "Separating voice, music, and effects",
            PipelineStep::Transcribing => "Converting speech to text",
            PipelineStep::Translating => "Translating to target language",
            PipelineStep::Synthesizing => "Cloning voice and generating dubbed audio",
            PipelineStep::Mixing => "Combining all audio tracks",
            PipelineStep::Complete => "Video ready for download",
        }
    }

    /// The six entries shown by the step tracker, in order.
    pub const TRACKED: &'static [PipelineStep] = &[
        PipelineStep::Extracting,
        PipelineStep::Transcribing,
        PipelineStep::Translating,
        PipelineStep::Synthesizing,
        PipelineStep::Mixing,
        PipelineStep::Complete,
    ];
}

// ---------------------------------------------------------------------------
// PipelineStatus
// ---------------------------------------------------------------------------

/// Run status, orthogonal to [`PipelineStep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStatus {
    /// Nothing running (pre-pipeline phases).
    Idle,
    /// The current stage is doing simulated work.
    Processing,
    /// The current stage (or the whole run) finished.
    Complete,
    /// The run failed; absorbing — only a fresh start leaves it.
    Error,
}

// ---------------------------------------------------------------------------
// Artifact types
// ---------------------------------------------------------------------------

/// The separated-track kinds produced by extraction, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Voice,
    Background,
    Effects,
}

impl TrackKind {
    /// Stable identifier; extraction uses it as the track id too.
    pub fn id(&self) -> &'static str {
        match self {
            TrackKind::Voice => "voice",
            TrackKind::Background => "background",
            TrackKind::Effects => "effects",
        }
    }

    /// Capitalised label for the track list ("Voice Track" etc.).
    pub fn label(&self) -> &'static str {
        match self {
            TrackKind::Voice => "Voice",
            TrackKind::Background => "Background",
            TrackKind::Effects => "Effects",
        }
    }
}

/// One separated audio track with its mock waveform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Identifier, equal to the track kind's id.
    pub id: String,
    pub kind: TrackKind,
    /// Playable source — the uploaded video's own path in this demo.
    pub source: String,
    /// Mix level copied from the configured volume balance at extraction time.
    pub volume: f32,
    /// 100 amplitude samples in `[0, 100)`.
    pub waveform: Vec<f32>,
}

/// One time-aligned transcript segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionSegment {
    pub id: String,
    /// Segment start in seconds.
    pub start: f64,
    /// Segment end in seconds.
    pub end: f64,
    pub text: String,
    pub speaker: Option<String>,
    /// Recognition confidence in `[0.9, 1.0)` for the mock generator.
    pub confidence: Option<f64>,
}

/// Full transcript of the source audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub segments: Vec<TranscriptionSegment>,
    /// Source-language code the transcript is in.
    pub language: String,
}

/// One translated segment; timing and speaker carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationSegment {
    pub id: String,
    pub original_text: String,
    pub translated_text: String,
    pub start: f64,
    pub end: f64,
    pub speaker: Option<String>,
}

/// Full translation of the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub segments: Vec<TranslationSegment>,
    pub source_language: String,
    pub target_language: String,
}

// ---------------------------------------------------------------------------
// ProcessingData
// ---------------------------------------------------------------------------

/// Accumulating result payload.
///
/// Each completed stage sets its own field; the driver never clears or
/// rewrites a field once set, so every emission's data is a superset of the
/// previous one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingData {
    pub audio_tracks: Option<Vec<AudioTrack>>,
    pub transcription: Option<Transcription>,
    pub translation: Option<Translation>,
    /// Stand-in for the synthesised dub — the video's own source path.
    pub synthesized_audio: Option<String>,
    /// Stand-in for the final muxed video — the video's own source path.
    pub final_video: Option<String>,
}

// ---------------------------------------------------------------------------
// PipelineState
// ---------------------------------------------------------------------------

/// A full snapshot of the session, emitted by the driver and rendered by the
/// UI.  Serializable by design so the session state stays an explicit object
/// rather than ambient UI state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineState {
    pub step: PipelineStep,
    /// Stage progress, `0` – `100`.
    pub progress: u8,
    pub status: PipelineStatus,
    /// Human-readable status line for the tracker / banner.
    pub message: Option<String>,
    pub data: ProcessingData,
}

impl PipelineState {
    /// The session-start state: nothing uploaded, nothing running.
    pub fn initial() -> Self {
        Self {
            step: PipelineStep::Upload,
            progress: 0,
            status: PipelineStatus::Idle,
            message: None,
            data: ProcessingData::default(),
        }
    }

    /// State entered when an upload is accepted: ready to configure.
    pub fn configuring() -> Self {
        Self {
            step: PipelineStep::Configure,
            ..Self::initial()
        }
    }

    /// `true` while a run is in flight — the UI hides the start button and
    /// schedules frequent repaints.
    pub fn is_processing(&self) -> bool {
        self.status == PipelineStatus::Processing
    }

    /// `true` once the whole run has finished successfully.
    pub fn is_finished(&self) -> bool {
        self.step == PipelineStep::Complete && self.status == PipelineStatus::Complete
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::initial()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_idle_upload() {
        let st = PipelineState::initial();
        assert_eq!(st.step, PipelineStep::Upload);
        assert_eq!(st.progress, 0);
        assert_eq!(st.status, PipelineStatus::Idle);
        assert!(st.message.is_none());
        assert_eq!(st.data, ProcessingData::default());
    }

    #[test]
    fn configuring_keeps_idle_status() {
        let st = PipelineState::configuring();
        assert_eq!(st.step, PipelineStep::Configure);
        assert_eq!(st.status, PipelineStatus::Idle);
    }

    #[test]
    fn steps_are_ordered() {
        assert!(PipelineStep::Upload < PipelineStep::Configure);
        assert!(PipelineStep::Extracting < PipelineStep::Transcribing);
        assert!(PipelineStep::Mixing < PipelineStep::Complete);
    }

    #[test]
    fn tracked_steps_match_the_stepper() {
        assert_eq!(PipelineStep::TRACKED.len(), 6);
        assert_eq!(PipelineStep::TRACKED[0], PipelineStep::Extracting);
        assert_eq!(PipelineStep::TRACKED[5], PipelineStep::Complete);
    }

    #[test]
    fn finished_requires_complete_step_and_status() {
        let mut st = PipelineState::initial();
        assert!(!st.is_finished());

        st.step = PipelineStep::Complete;
        st.status = PipelineStatus::Complete;
        st.progress = 100;
        assert!(st.is_finished());
        assert!(!st.is_processing());
    }

    #[test]
    fn track_kind_ids() {
        assert_eq!(TrackKind::Voice.id(), "voice");
        assert_eq!(TrackKind::Background.id(), "background");
        assert_eq!(TrackKind::Effects.id(), "effects");
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut st = PipelineState::initial();
        st.step = PipelineStep::Translating;
        st.status = PipelineStatus::Processing;
        st.message = Some("Translating text...".into());

        let json = serde_json::to_string(&st).unwrap();
        let back: PipelineState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, st);
    }
}
