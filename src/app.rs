//! Dub Studio — egui/eframe application.
//!
//! # Architecture
//!
//! [`DubStudioApp`] is the top-level [`eframe::App`].  It owns the session
//! state (the uploaded asset, the dubbing config and the latest
//! [`PipelineState`] snapshot) and two channel endpoints:
//!
//! * `command_tx` — sends [`PipelineCommand`] to the pipeline driver.
//! * `event_rx`   — receives [`PipelineState`] snapshots from the driver.
//!
//! Each frame drains `event_rx`, advances the simulated playback clock, and
//! renders the four sections: upload, configuration, step tracker, preview.
//! All pipeline logic lives in the driver; the app only renders snapshots.

use std::time::{Duration, Instant};

use eframe::egui;
use tokio::sync::mpsc;

use crate::config::{ConfigUpdate, DubbingConfig};
use crate::language::{language_name, SUPPORTED_LANGUAGES};
use crate::pipeline::{
    PipelineCommand, PipelineState, PipelineStatus, PipelineStep, TrackKind,
};
use crate::subtitle::{cue_at, demo_cues, to_srt, SubtitleCue};
use crate::video::asset::VIDEO_EXTENSIONS;
use crate::video::{format_duration, format_file_size, VideoAsset};

// ---------------------------------------------------------------------------
// Player — simulated playback clock
// ---------------------------------------------------------------------------

/// Preview playback state.
///
/// egui has no video decoder, so the preview drives subtitle sync with a
/// wall-clock timeline over the probed duration instead of real frames.
/// Controls mirror native media-element semantics: play/pause, seek, volume,
/// mute.
struct Player {
    playing: bool,
    /// Current playback position in seconds.
    position: f64,
    /// Wall-clock instant of the previous tick while playing.
    last_tick: Option<Instant>,
    volume: f32,
    muted: bool,
}

impl Player {
    fn new() -> Self {
        Self {
            playing: false,
            position: 0.0,
            last_tick: None,
            volume: 1.0,
            muted: false,
        }
    }

    /// Advance the position while playing; pauses at the end of the video.
    fn tick(&mut self, duration: f64) {
        let now = Instant::now();
        if self.playing {
            if let Some(last) = self.last_tick {
                self.position += now.duration_since(last).as_secs_f64();
            }
            if self.position >= duration {
                self.position = duration;
                self.playing = false;
            }
        }
        self.last_tick = Some(now);
    }

    fn toggle(&mut self) {
        self.playing = !self.playing;
        self.last_tick = Some(Instant::now());
    }

    fn seek(&mut self, position: f64, duration: f64) {
        self.position = position.clamp(0.0, duration);
    }
}

// ---------------------------------------------------------------------------
// DubStudioApp
// ---------------------------------------------------------------------------

/// eframe application — the dubbing studio window.
pub struct DubStudioApp {
    // ── Session state ────────────────────────────────────────────────────
    /// The accepted upload, if any.
    asset: Option<VideoAsset>,
    /// Current dubbing configuration.
    config: DubbingConfig,
    /// Latest pipeline snapshot received from the driver.
    pipeline: PipelineState,
    /// Inline alert for a rejected upload.
    upload_error: Option<String>,

    // ── UI state ─────────────────────────────────────────────────────────
    /// Whether the configuration panel is expanded.
    show_config: bool,
    /// Demo subtitle cues for the preview overlay.
    cues: Vec<SubtitleCue>,
    player: Player,

    // ── Channels ─────────────────────────────────────────────────────────
    command_tx: mpsc::Sender<PipelineCommand>,
    event_rx: mpsc::Receiver<PipelineState>,
}

impl DubStudioApp {
    pub fn new(
        command_tx: mpsc::Sender<PipelineCommand>,
        event_rx: mpsc::Receiver<PipelineState>,
        config: DubbingConfig,
    ) -> Self {
        Self {
            asset: None,
            config,
            pipeline: PipelineState::initial(),
            upload_error: None,
            show_config: true,
            cues: demo_cues(),
            player: Player::new(),
            command_tx,
            event_rx,
        }
    }

    // ── Channel polling ──────────────────────────────────────────────────

    /// Drain all pending pipeline snapshots (non-blocking); the last one
    /// wins since each snapshot is complete.
    fn poll_events(&mut self) {
        while let Ok(state) = self.event_rx.try_recv() {
            self.pipeline = state;
        }
    }

    // ── Upload handling ──────────────────────────────────────────────────

    /// Accept or reject a candidate file.  Rejection shows an inline alert
    /// and leaves all prior state untouched.
    fn handle_upload(&mut self, path: &std::path::Path) {
        match VideoAsset::open(path) {
            Ok(asset) => {
                // Dropping the old asset releases its handle before the
                // replacement is stored.
                self.asset = Some(asset);
                self.pipeline = PipelineState::configuring();
                self.upload_error = None;
                self.player = Player::new();
            }
            Err(e) => {
                log::warn!("upload rejected: {e}");
                self.upload_error = Some(e.to_string());
            }
        }
    }

    fn remove_video(&mut self) {
        self.asset = None;
        self.pipeline = PipelineState::initial();
        self.upload_error = None;
        self.player = Player::new();
    }

    /// Files dropped anywhere on the window count as upload attempts.
    fn poll_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            self.handle_upload(&path);
        }
    }

    // ── Config editing ───────────────────────────────────────────────────

    fn apply_config(&mut self, update: ConfigUpdate) {
        self.config = self.config.apply(update);
    }

    fn start_dubbing(&mut self) {
        let Some(asset) = self.asset.clone() else {
            return;
        };
        let cmd = PipelineCommand::StartDubbing {
            asset,
            config: self.config.clone(),
        };
        if self.command_tx.try_send(cmd).is_ok() {
            // Optimistic transition; the driver's first emission confirms it.
            self.pipeline.step = PipelineStep::Extracting;
            self.pipeline.progress = 0;
            self.pipeline.status = PipelineStatus::Processing;
            self.pipeline.message = Some("Extracting audio tracks...".into());
        } else {
            log::error!("pipeline command channel is closed or full");
        }
    }

    // ── Upload section ───────────────────────────────────────────────────

    fn draw_upload(&mut self, ui: &mut egui::Ui) {
        ui.heading("Upload Video");
        ui.add_space(6.0);

        if let Some(msg) = self.upload_error.clone() {
            ui.colored_label(egui::Color32::from_rgb(255, 136, 68), msg);
            ui.add_space(4.0);
        }

        match self.asset.clone() {
            None => {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new("Drop your video here")
                                    .size(16.0)
                                    .strong(),
                            );
                            ui.label("or");
                            if ui.button("Browse...").clicked() {
                                let picked = rfd::FileDialog::new()
                                    .add_filter("Video", VIDEO_EXTENSIONS)
                                    .pick_file();
                                if let Some(path) = picked {
                                    self.handle_upload(&path);
                                }
                            }
                            ui.add_space(4.0);
                            ui.label(
                                egui::RichText::new("Supports MP4, MOV, AVI, WebM (Max 500MB)")
                                    .size(11.0)
                                    .weak(),
                            );
                        });
                    });
            }
            Some(asset) => {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&asset.name).strong());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Remove").clicked() {
                                    self.remove_video();
                                }
                            },
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label(format!("Duration: {}", format_duration(asset.duration)));
                        ui.separator();
                        ui.label(format!("Size: {}", format_file_size(asset.size)));
                    });
                });
            }
        }
    }

    // ── Configuration section ────────────────────────────────────────────

    fn draw_config(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Configuration");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle = if self.show_config { "Hide" } else { "Show" };
                if ui.small_button(toggle).clicked() {
                    self.show_config = !self.show_config;
                }
            });
        });

        if self.show_config {
            ui.add_space(6.0);
            self.draw_language_selectors(ui);
            ui.add_space(8.0);
            self.draw_toggles(ui);
            ui.add_space(8.0);
            self.draw_sliders(ui);
        }

        if self.pipeline.step == PipelineStep::Configure {
            ui.add_space(10.0);
            let start = egui::Button::new(
                egui::RichText::new("▶  Start Dubbing Process").size(15.0),
            )
            .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add(start).clicked() {
                self.start_dubbing();
            }
        }
    }

    fn draw_language_selectors(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut update = ConfigUpdate::default();

            egui::ComboBox::from_label("Source Language")
                .selected_text(selector_label(&self.config.source_language))
                .show_ui(ui, |ui| {
                    for lang in SUPPORTED_LANGUAGES {
                        let selected = self.config.source_language == lang.code;
                        if ui.selectable_label(selected, lang.label()).clicked() {
                            update.source_language = Some(lang.code.into());
                        }
                    }
                });

            egui::ComboBox::from_label("Target Language")
                .selected_text(selector_label(&self.config.target_language))
                .show_ui(ui, |ui| {
                    for lang in SUPPORTED_LANGUAGES {
                        let selected = self.config.target_language == lang.code;
                        if ui.selectable_label(selected, lang.label()).clicked() {
                            update.target_language = Some(lang.code.into());
                        }
                    }
                });

            self.apply_config(update);
        });
    }

    fn draw_toggles(&mut self, ui: &mut egui::Ui) {
        let mut update = ConfigUpdate::default();

        let mut voice_cloning = self.config.voice_cloning;
        if ui
            .checkbox(&mut voice_cloning, "Voice Cloning")
            .on_hover_text("Match original voice characteristics")
            .changed()
        {
            update.voice_cloning = Some(voice_cloning);
        }

        let mut preserve = self.config.preserve_background;
        if ui
            .checkbox(&mut preserve, "Preserve Background")
            .on_hover_text("Keep music & sound effects")
            .changed()
        {
            update.preserve_background = Some(preserve);
        }

        let mut subtitles = self.config.subtitles;
        if ui
            .checkbox(&mut subtitles, "Generate Subtitles")
            .on_hover_text("Add translated subtitles")
            .changed()
        {
            update.subtitles = Some(subtitles);
        }

        // Dependent control: greyed out while subtitles are off.
        let mut show_original = self.config.show_original_subtitles;
        let response = ui.add_enabled(
            self.config.subtitles,
            egui::Checkbox::new(&mut show_original, "Original Subtitles"),
        );
        if response.on_hover_text("Show original text too").changed() {
            update.show_original_subtitles = Some(show_original);
        }

        self.apply_config(update);
    }

    fn draw_sliders(&mut self, ui: &mut egui::Ui) {
        let mut update = ConfigUpdate::default();

        let mut speed = self.config.voice_speed;
        if ui
            .add(
                egui::Slider::new(&mut speed, 0.5..=2.0)
                    .step_by(0.1)
                    .text("Voice Speed")
                    .suffix("x"),
            )
            .changed()
        {
            update.voice_speed = Some(speed);
        }

        ui.add_space(4.0);
        ui.label(egui::RichText::new("Volume Balance").strong());

        let balance = self.config.volume_balance;

        let mut voice = balance.voice;
        if ui
            .add(percent_slider(&mut voice, "Dubbed Voice"))
            .changed()
        {
            update.volume_balance =
                ConfigUpdate::voice_volume(balance, voice).volume_balance;
        }

        let mut background = balance.background;
        if ui
            .add(percent_slider(&mut background, "Background Music"))
            .changed()
        {
            update.volume_balance =
                ConfigUpdate::background_volume(balance, background).volume_balance;
        }

        let mut effects = balance.effects;
        if ui
            .add(percent_slider(&mut effects, "Sound Effects"))
            .changed()
        {
            update.volume_balance =
                ConfigUpdate::effects_volume(balance, effects).volume_balance;
        }

        self.apply_config(update);
    }

    // ── Step tracker ─────────────────────────────────────────────────────

    fn draw_steps(&mut self, ui: &mut egui::Ui) {
        ui.heading("Processing Pipeline");
        ui.add_space(6.0);

        let current = PipelineStep::TRACKED
            .iter()
            .position(|s| *s == self.pipeline.step);

        for (index, step) in PipelineStep::TRACKED.iter().enumerate() {
            let is_complete = current.is_some_and(|c| {
                index < c || (index == c && self.pipeline.status == PipelineStatus::Complete)
            });
            let is_current =
                current == Some(index) && self.pipeline.status == PipelineStatus::Processing;

            ui.horizontal(|ui| {
                if is_complete {
                    ui.colored_label(egui::Color32::from_rgb(80, 200, 120), "✔");
                } else if is_current {
                    ui.spinner();
                } else {
                    ui.weak("○");
                }

                ui.vertical(|ui| {
                    let label = egui::RichText::new(step.label()).strong();
                    if is_complete || is_current {
                        ui.label(label);
                    } else {
                        ui.weak(step.label());
                    }
                    ui.label(egui::RichText::new(step.description()).size(11.0).weak());

                    if is_current {
                        ui.add(
                            egui::ProgressBar::new(self.pipeline.progress as f32 / 100.0)
                                .desired_height(6.0),
                        );
                        if let Some(msg) = &self.pipeline.message {
                            ui.label(egui::RichText::new(msg.as_str()).size(11.0).italics());
                        }
                    }
                });
            });
            ui.add_space(4.0);
        }

        if self.pipeline.status == PipelineStatus::Error {
            ui.add_space(4.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.colored_label(
                    egui::Color32::from_rgb(255, 136, 68),
                    self.pipeline
                        .message
                        .as_deref()
                        .unwrap_or("Processing failed."),
                );
            });
        }
    }

    // ── Completion card ──────────────────────────────────────────────────

    fn draw_download_card(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(
                egui::RichText::new("Dubbing Complete!")
                    .size(16.0)
                    .color(egui::Color32::from_rgb(80, 200, 120))
                    .strong(),
            );
            ui.label("Your video has been successfully dubbed");
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                // Presentational only — no dubbed video exists to write.
                let _ = ui.button("Download Dubbed Video");

                if ui.button("Download Subtitles (SRT)").clicked() {
                    self.save_subtitles();
                }
            });

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Processing Summary:").strong());
            ui.label("✓ Audio tracks separated and preserved");
            ui.label(format!(
                "✓ Voice cloned and synthesized in {}",
                language_name(&self.config.target_language)
            ));
            ui.label("✓ Background audio and effects preserved");
            ui.label("✓ Dual subtitles generated (original + translated)");
        });
    }

    fn save_subtitles(&self) {
        let Some(translation) = &self.pipeline.data.translation else {
            return;
        };

        let picked = rfd::FileDialog::new()
            .set_file_name("subtitles.srt")
            .save_file();
        if let Some(path) = picked {
            match std::fs::write(&path, to_srt(translation)) {
                Ok(()) => log::info!("subtitles written to {}", path.display()),
                Err(e) => log::error!("failed to write subtitles: {e}"),
            }
        }
    }

    // ── Preview section ──────────────────────────────────────────────────

    fn draw_preview(&mut self, ui: &mut egui::Ui) {
        let Some(asset) = self.asset.clone() else {
            return;
        };

        ui.horizontal(|ui| {
            ui.heading("Video Preview");
            if self.pipeline.is_finished() {
                ui.colored_label(egui::Color32::from_rgb(80, 200, 120), "✓ Dubbed");
            }
        });
        ui.add_space(6.0);

        self.draw_screen(ui);
        ui.add_space(4.0);
        self.draw_controls(ui, asset.duration);

        if let Some(tracks) = self.pipeline.data.audio_tracks.clone() {
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Audio Tracks").size(15.0).strong());
            for track in &tracks {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(format!("{} Track", track.kind.label()));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.weak(format!(
                                    "Volume: {}%",
                                    (track.volume * 100.0).round() as u32
                                ));
                            },
                        );
                    });
                    draw_waveform(ui, &track.waveform, track_color(track.kind));
                });
            }
        }

        if let Some(transcription) = self.pipeline.data.transcription.clone() {
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Transcription").size(15.0).strong());
            egui::ScrollArea::vertical()
                .id_salt("transcription")
                .max_height(160.0)
                .show(ui, |ui| {
                    for seg in &transcription.segments {
                        ui.horizontal_wrapped(|ui| {
                            ui.monospace(format!(
                                "[{} - {}]",
                                format_duration(seg.start),
                                format_duration(seg.end)
                            ));
                            ui.label(&seg.text);
                            if let Some(speaker) = &seg.speaker {
                                ui.weak(format!("({speaker})"));
                            }
                        });
                    }
                });
        }

        if let Some(translation) = self.pipeline.data.translation.clone() {
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Translation").size(15.0).strong());
            egui::ScrollArea::vertical()
                .id_salt("translation")
                .max_height(160.0)
                .show(ui, |ui| {
                    for seg in &translation.segments {
                        ui.label(
                            egui::RichText::new(&seg.original_text).italics().weak(),
                        );
                        ui.label(egui::RichText::new(&seg.translated_text).strong());
                        ui.add_space(4.0);
                    }
                });
        }
    }

    /// The "screen": a black rect with the subtitle overlay near the bottom.
    fn draw_screen(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(width, width * 9.0 / 16.0),
            egui::Sense::hover(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(10, 10, 10));

        if !self.config.subtitles {
            return;
        }
        let Some(cue) = cue_at(&self.cues, self.player.position) else {
            return;
        };

        let mut anchor = rect.center_bottom() - egui::vec2(0.0, 28.0);
        painter.text(
            anchor,
            egui::Align2::CENTER_BOTTOM,
            &cue.translated,
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
        if self.config.show_original_subtitles {
            anchor.y -= 26.0;
            painter.text(
                anchor,
                egui::Align2::CENTER_BOTTOM,
                &cue.original,
                egui::FontId::proportional(13.0),
                egui::Color32::from_rgb(200, 200, 200),
            );
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui, duration: f64) {
        // Seek bar
        let mut position = self.player.position;
        let seek = ui.add(
            egui::Slider::new(&mut position, 0.0..=duration.max(0.1))
                .show_value(false)
                .trailing_fill(true),
        );
        if seek.changed() {
            self.player.seek(position, duration);
        }

        ui.horizontal(|ui| {
            let icon = if self.player.playing { "⏸" } else { "▶" };
            if ui.button(icon).clicked() {
                self.player.toggle();
            }

            ui.monospace(format!(
                "{} / {}",
                format_duration(self.player.position),
                format_duration(duration)
            ));

            let mute_icon = if self.player.muted || self.player.volume == 0.0 {
                "🔇"
            } else {
                "🔊"
            };
            if ui.button(mute_icon).clicked() {
                self.player.muted = !self.player.muted;
            }
            ui.add(
                egui::Slider::new(&mut self.player.volume, 0.0..=1.0)
                    .show_value(false),
            );
        });
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for DubStudioApp {
    /// Called every frame by eframe.  Polls channels, advances the playback
    /// clock, then renders the studio.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();
        self.poll_dropped_files(ctx);

        if let Some(asset) = &self.asset {
            let duration = asset.duration;
            self.player.tick(duration);
        }

        // Repaints: the waveform/progress animation while processing, the
        // playback clock while playing.
        if self.pipeline.is_processing() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        if self.player.playing {
            ctx.request_repaint_after(Duration::from_millis(33));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new("Advanced Video Dubbing Studio").size(24.0),
                    );
                    ui.label(
                        egui::RichText::new(
                            "Professional AI-powered video dubbing with voice cloning, \
                             background audio preservation, and multilingual support",
                        )
                        .weak(),
                    );
                });
                ui.add_space(12.0);

                self.draw_upload(ui);

                if self.asset.is_some() {
                    ui.add_space(12.0);
                    ui.separator();
                    self.draw_config(ui);

                    let past_configure = self.pipeline.step > PipelineStep::Configure;
                    if past_configure {
                        ui.add_space(12.0);
                        ui.separator();
                        self.draw_steps(ui);
                    }

                    if self.pipeline.is_finished() {
                        ui.add_space(12.0);
                        self.draw_download_card(ui);
                    }

                    if self.pipeline.step > PipelineStep::Upload {
                        ui.add_space(12.0);
                        ui.separator();
                        self.draw_preview(ui);
                    }
                }
            });
        });
    }

    /// Persist the dubbing settings on exit (best-effort).
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save() {
            log::warn!("failed to save settings: {e}");
        }
        log::info!("Dub Studio closing");
    }
}

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

fn selector_label(code: &str) -> String {
    crate::language::find_language(code)
        .map(|l| l.label())
        .unwrap_or_else(|| code.to_string())
}

fn percent_slider<'a>(value: &'a mut f32, text: &str) -> egui::Slider<'a> {
    egui::Slider::new(value, 0.0..=1.0)
        .step_by(0.05)
        .text(text)
        .custom_formatter(|v, _| format!("{}%", (v * 100.0).round() as u32))
}

fn track_color(kind: TrackKind) -> egui::Color32 {
    match kind {
        TrackKind::Voice => egui::Color32::from_rgb(68, 136, 255),
        TrackKind::Background => egui::Color32::from_rgb(80, 200, 120),
        TrackKind::Effects => egui::Color32::from_rgb(170, 100, 240),
    }
}

/// Amplitude bar chart for one separated track (first 50 samples, matching
/// the compact track card).
fn draw_waveform(ui: &mut egui::Ui, waveform: &[f32], color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 36.0),
        egui::Sense::hover(),
    );

    let painter = ui.painter();
    let samples: Vec<f32> = waveform.iter().take(50).copied().collect();
    let num_bars = samples.len().max(1);
    let bar_width = rect.width() / num_bars as f32;

    for (i, &amplitude) in samples.iter().enumerate() {
        let x = rect.left() + i as f32 * bar_width;
        let bar_height = (amplitude / 100.0 * rect.height()).max(2.0);

        painter.rect_filled(
            egui::Rect::from_min_size(
                egui::pos2(x, rect.bottom() - bar_height),
                egui::vec2((bar_width * 0.7).max(1.0), bar_height),
            ),
            1.0,
            color,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_paused_at_zero() {
        let p = Player::new();
        assert!(!p.playing);
        assert_eq!(p.position, 0.0);
        assert!(!p.muted);
    }

    #[test]
    fn seek_clamps_to_the_video_bounds() {
        let mut p = Player::new();
        p.seek(99.0, 12.0);
        assert_eq!(p.position, 12.0);
        p.seek(-3.0, 12.0);
        assert_eq!(p.position, 0.0);
    }

    #[test]
    fn tick_pauses_at_end_of_video() {
        let mut p = Player::new();
        p.playing = true;
        p.position = 11.99;
        p.last_tick = Some(Instant::now() - Duration::from_secs(1));
        p.tick(12.0);
        assert_eq!(p.position, 12.0);
        assert!(!p.playing);
    }

    #[test]
    fn tick_while_paused_does_not_advance() {
        let mut p = Player::new();
        p.last_tick = Some(Instant::now() - Duration::from_secs(5));
        p.tick(12.0);
        assert_eq!(p.position, 0.0);
    }
}
