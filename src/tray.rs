use tray_icon::menu::{Menu, MenuEvent, MenuItem};
use tray_icon::TrayIconBuilder;

const EXIT_MENU_ID: &str = "exit";
const ICON_SIZE: u32 = 16;

/// Keeps the tray icon alive for the lifetime of the app. On Linux the icon
/// is owned by a dedicated GTK thread instead and this handle is empty.
pub struct Tray {
    #[cfg(not(target_os = "linux"))]
    _icon: tray_icon::TrayIcon,
}

/// Create the tray icon with its single Exit entry. Failure is downgraded to
/// a warning: the overlay still runs and can exit via the quit hotkey.
#[cfg(target_os = "linux")]
pub fn spawn() -> Option<Tray> {
    // tray-icon requires a running GTK main loop on the thread that owns the
    // icon, which eframe's event loop is not.
    std::thread::spawn(|| {
        if let Err(e) = gtk::init() {
            tracing::warn!("failed to initialise GTK for the tray icon: {e}");
            return;
        }
        match build_tray() {
            Ok(_icon) => gtk::main(),
            Err(e) => tracing::warn!("failed to create tray icon: {e}"),
        }
    });
    Some(Tray {})
}

/// Create the tray icon with its single Exit entry. Failure is downgraded to
/// a warning: the overlay still runs and can exit via the quit hotkey.
#[cfg(not(target_os = "linux"))]
pub fn spawn() -> Option<Tray> {
    match build_tray() {
        Ok(icon) => Some(Tray { _icon: icon }),
        Err(e) => {
            tracing::warn!("failed to create tray icon: {e}");
            None
        }
    }
}

/// Drain pending tray menu events; true when Exit was chosen.
pub fn exit_selected() -> bool {
    let mut exit = false;
    while let Ok(event) = MenuEvent::receiver().try_recv() {
        if event.id.0 == EXIT_MENU_ID {
            tracing::info!("exit selected from tray menu");
            exit = true;
        }
    }
    exit
}

fn build_tray() -> anyhow::Result<tray_icon::TrayIcon> {
    let menu = Menu::new();
    let exit_item = MenuItem::with_id(EXIT_MENU_ID, "Exit", true, None);
    menu.append(&exit_item)?;

    let tray = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip("Page Glance")
        .with_icon(tray_icon_image()?)
        .build()?;
    Ok(tray)
}

// Flat single-color glyph; no image asset to ship.
fn tray_icon_image() -> anyhow::Result<tray_icon::Icon> {
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for _ in 0..ICON_SIZE * ICON_SIZE {
        rgba.extend_from_slice(&[0x33, 0x66, 0x99, 0xFF]);
    }
    Ok(tray_icon::Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE)?)
}
