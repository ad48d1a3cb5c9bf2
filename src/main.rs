//! Application entry point — Dub Studio.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`DubbingConfig`] from disk (returns default on first run).
//! 3. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 4. Build the translation provider ([`StaticTranslator`]).
//! 5. Create pipeline channels (`command`, `events`).
//! 6. Spawn the pipeline driver on the tokio runtime.
//! 7. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use tokio::sync::mpsc;

use dubstudio::{
    app::DubStudioApp,
    config::DubbingConfig,
    pipeline::{PipelineCommand, PipelineDriver, PipelineState},
    translate::{StaticTranslator, TranslationProvider},
};

use eframe::egui;

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options() -> eframe::NativeOptions {
    let vp = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 820.0])
        .with_min_inner_size([720.0, 540.0])
        .with_title("Dub Studio");

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dub Studio starting up");

    // 2. Configuration
    let config = DubbingConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load settings ({e}); using defaults");
        DubbingConfig::default()
    });

    // 3. Tokio runtime (2 worker threads — the driver is one long-lived task)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 4. Translation provider
    let translator: Arc<dyn TranslationProvider> = Arc::new(StaticTranslator::new());

    // 5. Channel setup
    let (command_tx, command_rx) = mpsc::channel::<PipelineCommand>(16);
    let (event_tx, event_rx) = mpsc::channel::<PipelineState>(64);

    // 6. Spawn the pipeline driver onto the tokio runtime
    rt.spawn(PipelineDriver::new(Arc::clone(&translator), event_tx).run(command_rx));

    // 7. Build the egui app and run it (blocks until the window is closed)
    let app = DubStudioApp::new(command_tx, event_rx, config);

    eframe::run_native(
        "Dub Studio",
        native_options(),
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
