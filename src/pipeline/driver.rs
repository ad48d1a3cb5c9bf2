//! Pipeline driver — walks the dubbing state machine on a tokio task.
//!
//! [`PipelineDriver::run`] is the single long-lived background task.  It
//! receives [`PipelineCommand`]s over an mpsc channel and emits full
//! [`PipelineState`] snapshots over a second channel; the UI drains those
//! snapshots each frame.
//!
//! # Stage walk
//!
//! ```text
//! StartDubbing { asset, config }
//!   └─▶ for each stage in Extracting … Mixing:
//!         emit { step, 0, Processing, message }
//!         sleep(stage duration)                  ← simulated work
//!         attach the stage's fabricated output
//!         emit { step, 100, Complete, message, data-so-far }
//!         sleep(1 s)                             ← inter-stage gap
//!       (mixing's completion arrives as step = Complete)
//! any failure ─▶ emit { last step, last progress, Error, generic message }
//! ```
//!
//! Every stage's duration is a fixed constant — no work is data-dependent —
//! and a started run cannot be cancelled; it reaches `Complete` or the
//! single error emission.  `data` is carried in every emission and only ever
//! grows.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::DubbingConfig;
use crate::translate::{TranslateError, TranslationProvider};
use crate::video::VideoAsset;

use super::sim::{generate_segments, generate_waveform};
use super::state::{
    AudioTrack, PipelineState, PipelineStatus, PipelineStep, ProcessingData, Transcription,
    Translation, TranslationSegment, TrackKind,
};

// ---------------------------------------------------------------------------
// Timing constants
// ---------------------------------------------------------------------------

/// Simulated work per stage, in milliseconds.
const EXTRACTING_MS: u64 = 2_000;
const TRANSCRIBING_MS: u64 = 3_000;
const TRANSLATING_MS: u64 = 2_000;
const SYNTHESIZING_MS: u64 = 4_000;
const MIXING_MS: u64 = 3_000;

/// Idle gap between stages, in milliseconds.
const STAGE_GAP_MS: u64 = 1_000;

/// The one user-facing failure message; no per-stage cause is exposed.
pub const FAILURE_MESSAGE: &str = "Processing failed. Please try again.";

// ---------------------------------------------------------------------------
// PipelineCommand
// ---------------------------------------------------------------------------

/// Commands sent from the UI to the driver.
#[derive(Debug, Clone)]
pub enum PipelineCommand {
    /// Begin the simulated dubbing run.  The config is snapshotted here —
    /// edits made while the run is in flight do not affect it.
    StartDubbing {
        asset: VideoAsset,
        config: DubbingConfig,
    },
}

// ---------------------------------------------------------------------------
// PipelineDriver
// ---------------------------------------------------------------------------

/// Drives the dubbing pipeline.  Create with [`PipelineDriver::new`], then
/// spawn [`run`](Self::run) on the tokio runtime.
pub struct PipelineDriver {
    translator: Arc<dyn TranslationProvider>,
    events: mpsc::Sender<PipelineState>,
    /// Last emitted (step, progress) — the error emission reports these.
    last_emitted: (PipelineStep, u8),
}

impl PipelineDriver {
    pub fn new(
        translator: Arc<dyn TranslationProvider>,
        events: mpsc::Sender<PipelineState>,
    ) -> Self {
        Self {
            translator,
            events,
            last_emitted: (PipelineStep::Configure, 0),
        }
    }

    /// Run the driver until `command_rx` is closed.
    ///
    /// Spawn as a tokio task from `main()`; it never returns while the
    /// channel is open.
    pub async fn run(mut self, mut command_rx: mpsc::Receiver<PipelineCommand>) {
        while let Some(cmd) = command_rx.recv().await {
            match cmd {
                PipelineCommand::StartDubbing { asset, config } => {
                    log::info!(
                        "pipeline: starting dubbing run for {} ({} -> {})",
                        asset.name,
                        config.source_language,
                        config.target_language
                    );

                    if let Err(e) = self.run_stages(&asset, &config).await {
                        log::error!("pipeline: run failed: {e}");
                        let (step, progress) = self.last_emitted;
                        self.emit(PipelineState {
                            step,
                            progress,
                            status: PipelineStatus::Error,
                            message: Some(FAILURE_MESSAGE.into()),
                            data: ProcessingData::default(),
                        })
                        .await;
                    }
                }
            }
        }

        log::info!("pipeline: command channel closed, driver shutting down");
    }

    // -----------------------------------------------------------------------
    // Stage walk
    // -----------------------------------------------------------------------

    /// The whole stage sequence as one fallible unit — any error anywhere
    /// degrades the run to the single generic failure emission in `run`.
    async fn run_stages(
        &mut self,
        asset: &VideoAsset,
        config: &DubbingConfig,
    ) -> Result<(), TranslateError> {
        let mut data = ProcessingData::default();

        // ── 1. Audio extraction ──────────────────────────────────────────
        self.begin_stage(PipelineStep::Extracting, "Extracting audio tracks...", &data)
            .await;
        simulate_work(EXTRACTING_MS).await;

        let balance = config.volume_balance;
        data.audio_tracks = Some(
            [
                (TrackKind::Voice, balance.voice),
                (TrackKind::Background, balance.background),
                (TrackKind::Effects, balance.effects),
            ]
            .into_iter()
            .map(|(kind, volume)| AudioTrack {
                id: kind.id().into(),
                kind,
                source: asset.source(),
                volume,
                waveform: generate_waveform(),
            })
            .collect(),
        );

        self.finish_stage(
            PipelineStep::Extracting,
            "Audio tracks extracted successfully",
            &data,
        )
        .await;
        simulate_work(STAGE_GAP_MS).await;

        // ── 2. Transcription ─────────────────────────────────────────────
        self.begin_stage(PipelineStep::Transcribing, "Transcribing audio...", &data)
            .await;
        simulate_work(TRANSCRIBING_MS).await;

        let transcription = Transcription {
            segments: generate_segments(asset.duration),
            language: config.source_language.clone(),
        };
        data.transcription = Some(transcription.clone());

        self.finish_stage(PipelineStep::Transcribing, "Transcription complete", &data)
            .await;
        simulate_work(STAGE_GAP_MS).await;

        // ── 3. Translation ───────────────────────────────────────────────
        self.begin_stage(PipelineStep::Translating, "Translating text...", &data)
            .await;
        simulate_work(TRANSLATING_MS).await;

        let mut segments = Vec::with_capacity(transcription.segments.len());
        for seg in &transcription.segments {
            let translated = self
                .translator
                .translate(&seg.text, &config.source_language, &config.target_language)
                .await?;
            segments.push(TranslationSegment {
                id: seg.id.clone(),
                original_text: seg.text.clone(),
                translated_text: translated,
                start: seg.start,
                end: seg.end,
                speaker: seg.speaker.clone(),
            });
        }
        data.translation = Some(Translation {
            segments,
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
        });

        self.finish_stage(PipelineStep::Translating, "Translation complete", &data)
            .await;
        simulate_work(STAGE_GAP_MS).await;

        // ── 4. Voice synthesis ───────────────────────────────────────────
        self.begin_stage(
            PipelineStep::Synthesizing,
            "Synthesizing dubbed voice with cloning...",
            &data,
        )
        .await;
        simulate_work(SYNTHESIZING_MS).await;

        // Cosmetic stage: the video's own source stands in for the dub.
        data.synthesized_audio = Some(asset.source());

        self.finish_stage(PipelineStep::Synthesizing, "Voice synthesis complete", &data)
            .await;
        simulate_work(STAGE_GAP_MS).await;

        // ── 5. Audio mixing ──────────────────────────────────────────────
        self.begin_stage(
            PipelineStep::Mixing,
            "Mixing audio tracks and generating final video...",
            &data,
        )
        .await;
        simulate_work(MIXING_MS).await;

        data.final_video = Some(asset.source());

        // Mixing's completion arrives as the terminal Complete step.
        self.finish_stage(PipelineStep::Complete, "Dubbing complete!", &data)
            .await;

        log::info!("pipeline: dubbing run complete");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Emission helpers
    // -----------------------------------------------------------------------

    async fn begin_stage(&mut self, step: PipelineStep, message: &str, data: &ProcessingData) {
        log::debug!("pipeline: {} -> processing", step.label());
        self.emit(PipelineState {
            step,
            progress: 0,
            status: PipelineStatus::Processing,
            message: Some(message.into()),
            data: data.clone(),
        })
        .await;
    }

    async fn finish_stage(&mut self, step: PipelineStep, message: &str, data: &ProcessingData) {
        log::debug!("pipeline: {} -> complete", step.label());
        self.emit(PipelineState {
            step,
            progress: 100,
            status: PipelineStatus::Complete,
            message: Some(message.into()),
            data: data.clone(),
        })
        .await;
    }

    async fn emit(&mut self, state: PipelineState) {
        self.last_emitted = (state.step, state.progress);
        // A closed event channel means the UI is gone; nothing useful to do.
        if self.events.send(state).await.is_err() {
            log::warn!("pipeline: event channel closed, dropping emission");
        }
    }
}

/// Fixed-length simulated work.  Real implementations replace this with
/// actual bounded or streaming computation while keeping the emitted-state
/// contract intact.
async fn simulate_work(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::StaticTranslator;
    use async_trait::async_trait;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Provider that always fails — exercises the single error path.
    struct FailTranslator;

    #[async_trait]
    impl TranslationProvider for FailTranslator {
        async fn translate(
            &self,
            _text: &str,
            _from: &str,
            _to: &str,
        ) -> Result<String, TranslateError> {
            Err(TranslateError::Backend("connection refused".into()))
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn demo_asset() -> VideoAsset {
        VideoAsset::from_parts("/tmp/demo.mp4", 25.0, 1_048_576, "demo.mp4")
    }

    /// Run a full driver lifecycle for one start command and collect every
    /// emitted snapshot.  The paused tokio clock fast-forwards the fixed
    /// stage delays.
    async fn collect_run(
        translator: Arc<dyn TranslationProvider>,
        config: DubbingConfig,
    ) -> Vec<PipelineState> {
        let (command_tx, command_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(64);

        let driver = PipelineDriver::new(translator, event_tx);
        let task = tokio::spawn(driver.run(command_rx));

        command_tx
            .send(PipelineCommand::StartDubbing {
                asset: demo_asset(),
                config,
            })
            .await
            .unwrap();
        drop(command_tx); // close the channel so run() returns

        task.await.unwrap();

        let mut states = Vec::new();
        while let Ok(state) = event_rx.try_recv() {
            states.push(state);
        }
        states
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    /// The emitted (step, progress, status) sequence is exactly the stage
    /// contract, each stage reaching 100/Complete before the next stage's
    /// processing emission.
    #[tokio::test(start_paused = true)]
    async fn full_run_emits_the_contracted_sequence() {
        let states = collect_run(Arc::new(StaticTranslator::new()), DubbingConfig::default()).await;

        let observed: Vec<_> = states
            .iter()
            .map(|s| (s.step, s.progress, s.status))
            .collect();

        use PipelineStatus::{Complete, Processing};
        use PipelineStep::*;
        let expected = vec![
            (Extracting, 0, Processing),
            (Extracting, 100, Complete),
            (Transcribing, 0, Processing),
            (Transcribing, 100, Complete),
            (Translating, 0, Processing),
            (Translating, 100, Complete),
            (Synthesizing, 0, Processing),
            (Synthesizing, 100, Complete),
            (Mixing, 0, Processing),
            (PipelineStep::Complete, 100, Complete),
        ];
        assert_eq!(observed, expected);

        // Every emission carries a message.
        assert!(states.iter().all(|s| s.message.is_some()));
        assert_eq!(
            states.last().unwrap().message.as_deref(),
            Some("Dubbing complete!")
        );
    }

    /// Once a data field appears it stays present and unchanged in every
    /// later emission.
    #[tokio::test(start_paused = true)]
    async fn data_accumulates_monotonically() {
        let states = collect_run(Arc::new(StaticTranslator::new()), DubbingConfig::default()).await;

        let mut tracks = None;
        let mut transcription = None;
        let mut translation = None;

        for st in &states {
            match (&tracks, &st.data.audio_tracks) {
                (None, Some(t)) => tracks = Some(t.clone()),
                (Some(prev), cur) => assert_eq!(cur.as_ref(), Some(prev)),
                (None, None) => {}
            }
            match (&transcription, &st.data.transcription) {
                (None, Some(t)) => transcription = Some(t.clone()),
                (Some(prev), cur) => assert_eq!(cur.as_ref(), Some(prev)),
                (None, None) => {}
            }
            match (&translation, &st.data.translation) {
                (None, Some(t)) => translation = Some(t.clone()),
                (Some(prev), cur) => assert_eq!(cur.as_ref(), Some(prev)),
                (None, None) => {}
            }
        }

        // All three artifacts did appear.
        assert!(tracks.is_some());
        assert!(transcription.is_some());
        assert!(translation.is_some());

        let last = states.last().unwrap();
        assert_eq!(last.data.synthesized_audio.as_deref(), Some("/tmp/demo.mp4"));
        assert_eq!(last.data.final_video.as_deref(), Some("/tmp/demo.mp4"));
    }

    /// Extraction yields exactly 3 tracks with ids voice/background/effects
    /// and volumes copied from the configured balance at run time.
    #[tokio::test(start_paused = true)]
    async fn extraction_tracks_mirror_the_volume_balance() {
        let mut config = DubbingConfig::default();
        config.volume_balance.voice = 0.7;
        config.volume_balance.background = 0.2;
        config.volume_balance.effects = 0.5;

        let states = collect_run(Arc::new(StaticTranslator::new()), config).await;
        let tracks = states
            .iter()
            .find_map(|s| s.data.audio_tracks.clone())
            .expect("extraction output missing");

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].id, "voice");
        assert_eq!(tracks[1].id, "background");
        assert_eq!(tracks[2].id, "effects");
        assert_eq!(tracks[0].volume, 0.7);
        assert_eq!(tracks[1].volume, 0.2);
        assert_eq!(tracks[2].volume, 0.5);

        for track in &tracks {
            assert_eq!(track.waveform.len(), 100);
            assert_eq!(track.source, "/tmp/demo.mp4");
        }
    }

    /// For a 25 s asset the transcript has 8 contiguous 3 s segments, and
    /// the translation carries ids, timing and speakers through unchanged.
    #[tokio::test(start_paused = true)]
    async fn translation_carries_segment_metadata_through() {
        let states = collect_run(Arc::new(StaticTranslator::new()), DubbingConfig::default()).await;
        let last = states.last().unwrap();

        let transcription = last.data.transcription.as_ref().unwrap();
        let translation = last.data.translation.as_ref().unwrap();
        assert_eq!(transcription.segments.len(), 8);
        assert_eq!(translation.segments.len(), 8);
        assert_eq!(transcription.language, "en");
        assert_eq!(translation.source_language, "en");
        assert_eq!(translation.target_language, "hi");

        for (src, dst) in transcription.segments.iter().zip(&translation.segments) {
            assert_eq!(dst.id, src.id);
            assert_eq!(dst.original_text, src.text);
            assert_eq!(dst.start, src.start);
            assert_eq!(dst.end, src.end);
            assert_eq!(dst.speaker, src.speaker);
        }

        // Default target is "hi", so the pool sentences hit the table.
        assert_eq!(
            translation.segments[0].translated_text,
            "हमारी प्रस्तुति में आपका स्वागत है।"
        );
    }

    /// An unmapped target language gets the untranslated sentinel.
    #[tokio::test(start_paused = true)]
    async fn unmapped_target_language_uses_the_sentinel() {
        let mut config = DubbingConfig::default();
        config.target_language = "es".into();

        let states = collect_run(Arc::new(StaticTranslator::new()), config).await;
        let translation = states.last().unwrap().data.translation.clone().unwrap();
        assert_eq!(
            translation.segments[0].translated_text,
            "[ES] Welcome to our presentation."
        );
    }

    /// Any failure collapses to one Error emission carrying the last known
    /// step/progress and the generic message, and the run halts.
    #[tokio::test(start_paused = true)]
    async fn provider_failure_collapses_to_the_generic_error() {
        let states = collect_run(Arc::new(FailTranslator), DubbingConfig::default()).await;

        let last = states.last().unwrap();
        assert_eq!(last.status, PipelineStatus::Error);
        assert_eq!(last.message.as_deref(), Some(FAILURE_MESSAGE));
        // Translation failed mid-stage: last known emission was the
        // translating processing one.
        assert_eq!(last.step, PipelineStep::Translating);
        assert_eq!(last.progress, 0);

        // Nothing after the error emission.
        let error_count = states
            .iter()
            .filter(|s| s.status == PipelineStatus::Error)
            .count();
        assert_eq!(error_count, 1);
        assert!(states.last().unwrap().data.translation.is_none());
    }

    /// The driver exits cleanly when the command channel closes with no
    /// commands sent.
    #[tokio::test(start_paused = true)]
    async fn driver_shuts_down_when_channel_closes() {
        let (command_tx, command_rx) = mpsc::channel::<PipelineCommand>(4);
        let (event_tx, mut event_rx) = mpsc::channel(4);

        let driver = PipelineDriver::new(Arc::new(StaticTranslator::new()), event_tx);
        drop(command_tx);

        driver.run(command_rx).await;
        assert!(event_rx.try_recv().is_err());
    }
}
