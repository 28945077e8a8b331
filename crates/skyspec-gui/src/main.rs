//! Sky Spectrum Viewer - Desktop GUI Application
//!
//! Loads the two sky-background spectra once at startup and presents
//! them under user-selectable unit/visibility combinations.

use std::path::PathBuf;

use eframe::egui;

use skyspec_gui::ViewerApp;
use skyspec_ingest::load_store;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let path_a = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("UVEX.txt"));
    let path_b = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("GIANO.txt"));

    // A malformed source aborts before any window is shown.
    let store = match load_store(&path_a, &path_b) {
        Ok(store) => store,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sky Spectrum Viewer")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sky Spectrum Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(store)))),
    )
}
