use crate::document::SegmentMode;
use crate::hotkey::{parse_hotkey, Hotkey, KeyBindings};
use rdev::Key;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// UTF-8 text file to page through.
    #[serde(default = "default_book_path")]
    pub book_path: String,
    /// File holding the big-endian encoded reading position.
    #[serde(default = "default_position_path")]
    pub position_path: String,
    #[serde(default)]
    pub segment_mode: SegmentMode,
    /// Characters per segment in fixed-width mode.
    #[serde(default = "default_line_width")]
    pub line_width: usize,
    /// Seconds without navigation before the clock takes over the display.
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold_secs: u64,
    /// Combo that shows/hides the overlay. Defaults to Alt+X.
    pub toggle_hotkey: Option<String>,
    /// Bare key advancing one segment while visible. Defaults to D.
    pub next_key: Option<String>,
    /// Bare key going back one segment while visible. Defaults to A.
    pub prev_key: Option<String>,
    /// Optional combo that exits the application. Disabled when unset.
    pub quit_hotkey: Option<String>,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Overlay window size. If absent, a default size is used.
    #[serde(default = "default_window_size")]
    pub window_size: Option<(f32, f32)>,
}

fn default_book_path() -> String {
    "book.txt".into()
}

fn default_position_path() -> String {
    crate::position::POSITION_FILE.into()
}

fn default_line_width() -> usize {
    30
}

fn default_idle_threshold() -> u64 {
    10
}

fn default_window_size() -> Option<(f32, f32)> {
    Some((800.0, 100.0))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            book_path: default_book_path(),
            position_path: default_position_path(),
            segment_mode: SegmentMode::default(),
            line_width: default_line_width(),
            idle_threshold_secs: default_idle_threshold(),
            toggle_hotkey: Some("Alt+X".into()),
            next_key: Some("D".into()),
            prev_key: Some("A".into()),
            quit_hotkey: None,
            debug_logging: false,
            window_size: default_window_size(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolve all binding strings, falling back to the stock bindings for
    /// anything missing or unparseable.
    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings {
            toggle: self.toggle_hotkey(),
            next: self.nav_key(self.next_key.as_deref(), Key::KeyD, "next_key"),
            prev: self.nav_key(self.prev_key.as_deref(), Key::KeyA, "prev_key"),
            quit: self.quit_hotkey(),
        }
    }

    fn toggle_hotkey(&self) -> Hotkey {
        if let Some(hotkey) = &self.toggle_hotkey {
            match parse_hotkey(hotkey) {
                Some(k) => return k,
                None => {
                    tracing::warn!(
                        "provided toggle_hotkey string '{}' is invalid; using default Alt+X",
                        hotkey
                    );
                }
            }
        }
        Hotkey {
            key: Key::KeyX,
            ctrl: false,
            shift: false,
            alt: true,
        }
    }

    fn quit_hotkey(&self) -> Option<Hotkey> {
        if let Some(hotkey) = &self.quit_hotkey {
            match parse_hotkey(hotkey) {
                Some(k) => return Some(k),
                None => {
                    tracing::warn!(
                        "provided quit_hotkey string '{}' is invalid; ignoring",
                        hotkey
                    );
                }
            }
        }
        None
    }

    /// Navigation bindings are bare keys; a string carrying modifiers is
    /// rejected like any other parse failure.
    fn nav_key(&self, value: Option<&str>, fallback: Key, name: &str) -> Key {
        if let Some(s) = value {
            match parse_hotkey(s) {
                Some(k) if !(k.ctrl || k.shift || k.alt) => return k.key,
                _ => {
                    tracing::warn!("provided {name} string '{s}' is invalid; using default");
                }
            }
        }
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::document::SegmentMode;
    use rdev::Key;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        let settings = Settings::load(path.to_str().unwrap()).expect("load");
        assert_eq!(settings.book_path, "book.txt");
        assert_eq!(settings.line_width, 30);
        assert_eq!(settings.idle_threshold_secs, 10);
        assert_eq!(settings.segment_mode, SegmentMode::Fixed);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        let settings = Settings {
            book_path: "novel.txt".into(),
            segment_mode: SegmentMode::Lines,
            quit_hotkey: Some("Ctrl+Q".into()),
            ..Settings::default()
        };
        settings.save(path.to_str().unwrap()).expect("save");

        let loaded = Settings::load(path.to_str().unwrap()).expect("load");
        assert_eq!(loaded.book_path, "novel.txt");
        assert_eq!(loaded.segment_mode, SegmentMode::Lines);
        assert_eq!(loaded.quit_hotkey.as_deref(), Some("Ctrl+Q"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"book_path": "other.txt"}"#).expect("write");
        let settings = Settings::load(path.to_str().unwrap()).expect("load");
        assert_eq!(settings.book_path, "other.txt");
        assert_eq!(settings.line_width, 30);
    }

    #[test]
    fn invalid_bindings_fall_back_to_stock_keys() {
        let settings = Settings {
            toggle_hotkey: Some("NotAKey+??".into()),
            next_key: Some("Ctrl+D".into()),
            prev_key: None,
            quit_hotkey: Some("garbage".into()),
            ..Settings::default()
        };
        let bindings = settings.key_bindings();
        assert_eq!(bindings.toggle.key, Key::KeyX);
        assert!(bindings.toggle.alt);
        assert_eq!(bindings.next, Key::KeyD);
        assert_eq!(bindings.prev, Key::KeyA);
        assert_eq!(bindings.quit, None);
    }
}
