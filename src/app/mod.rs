//! Application entry point wiring egui/eframe to launch the portfolio UI.

use std::sync::Arc;

use eframe::egui;
use egui_phosphor::Variant;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::logic::submit::LocalBackend;
use crate::prefs::{JsonFileStore, MemoryStore, PrefStore};
use crate::ui::FolioApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    if let Err(err) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger unavailable: {err}");
    }

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let prefs: Arc<dyn PrefStore> = match JsonFileStore::default_path() {
        Some(path) => Arc::new(JsonFileStore::open(path)),
        None => {
            log::warn!("no config directory found; preferences will not persist");
            Arc::new(MemoryStore::default())
        }
    };
    let backend = Arc::new(LocalBackend);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(FolioApp::new(backend, prefs)))
        }),
    )
}
