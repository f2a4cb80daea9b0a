use page_glance::document::Document;
use page_glance::gui::OverlayApp;
use page_glance::listener::HotkeyListener;
use page_glance::overlay::OverlayState;
use page_glance::pager::Pager;
use page_glance::settings::{Settings, SETTINGS_FILE};
use page_glance::{logging, position, tray};

use eframe::egui;
use std::sync::mpsc;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging);

    let document = Document::load(&settings.book_path, settings.segment_mode, settings.line_width)?;
    tracing::info!(
        segments = document.len(),
        "loaded book '{}'",
        settings.book_path
    );

    let start = position::load(&settings.position_path);
    let pager = Pager::new(document, start as usize);
    let state = OverlayState::new(pager, settings.idle_threshold_secs);

    let (tx, rx) = mpsc::channel();
    let listener = HotkeyListener::spawn(settings.key_bindings(), tx);
    let tray = tray::spawn();

    let (width, height) = settings.window_size.unwrap_or((800.0, 100.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_taskbar(false),
        centered: true,
        ..Default::default()
    };

    let position_path = settings.position_path.clone();
    eframe::run_native(
        "Page Glance",
        native_options,
        Box::new(move |_cc| Box::new(OverlayApp::new(state, rx, listener, position_path, tray))),
    )
    .map_err(|e| anyhow::anyhow!("overlay event loop failed: {e}"))?;

    Ok(())
}
