pub mod document;
pub mod gui;
pub mod hotkey;
pub mod listener;
pub mod logging;
pub mod overlay;
pub mod pager;
pub mod position;
pub mod settings;
pub mod tray;
pub mod visibility;
