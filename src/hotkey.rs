use rdev::{EventType, Key};

/// A global key combo: required modifiers plus the trigger key. Extra held
/// modifiers do not prevent a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Navigation commands produced by the global key hook and consumed by the
/// overlay event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerCommand {
    ToggleOverlay,
    NextSegment,
    PrevSegment,
    Quit,
}

/// The full set of active bindings. Next/prev are bare keys; the overlay
/// decides whether to act on them based on its visibility.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    pub toggle: Hotkey,
    pub next: Key,
    pub prev: Key,
    pub quit: Option<Hotkey>,
}

/// Parse a binding string like "Alt+X" or "Ctrl+Shift+Q" into a [`Hotkey`].
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut key: Option<Key> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "" => {}
            _ => key = Some(parse_key(&upper)?),
        }
    }

    key.map(|k| Hotkey {
        key: k,
        ctrl,
        shift,
        alt,
    })
}

const FUNCTION_KEYS: [Key; 12] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
];

const DIGIT_KEYS: [Key; 10] = [
    Key::Num0,
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

const LETTER_KEYS: [Key; 26] = [
    Key::KeyA,
    Key::KeyB,
    Key::KeyC,
    Key::KeyD,
    Key::KeyE,
    Key::KeyF,
    Key::KeyG,
    Key::KeyH,
    Key::KeyI,
    Key::KeyJ,
    Key::KeyK,
    Key::KeyL,
    Key::KeyM,
    Key::KeyN,
    Key::KeyO,
    Key::KeyP,
    Key::KeyQ,
    Key::KeyR,
    Key::KeyS,
    Key::KeyT,
    Key::KeyU,
    Key::KeyV,
    Key::KeyW,
    Key::KeyX,
    Key::KeyY,
    Key::KeyZ,
];

fn parse_key(upper: &str) -> Option<Key> {
    match upper {
        "SPACE" => return Some(Key::Space),
        "TAB" => return Some(Key::Tab),
        "ENTER" | "RETURN" => return Some(Key::Return),
        "ESC" | "ESCAPE" => return Some(Key::Escape),
        "DELETE" => return Some(Key::Delete),
        "BACKSPACE" => return Some(Key::Backspace),
        "CAPSLOCK" => return Some(Key::CapsLock),
        "HOME" => return Some(Key::Home),
        "END" => return Some(Key::End),
        "PAGEUP" => return Some(Key::PageUp),
        "PAGEDOWN" => return Some(Key::PageDown),
        "LEFT" | "LEFTARROW" => return Some(Key::LeftArrow),
        "RIGHT" | "RIGHTARROW" => return Some(Key::RightArrow),
        "UP" | "UPARROW" => return Some(Key::UpArrow),
        "DOWN" | "DOWNARROW" => return Some(Key::DownArrow),
        _ => {}
    }

    if let Some(n) = upper.strip_prefix('F').and_then(|rest| rest.parse::<usize>().ok()) {
        return FUNCTION_KEYS.get(n.checked_sub(1)?).copied();
    }

    let mut chars = upper.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_digit() {
        DIGIT_KEYS.get(c as usize - '0' as usize).copied()
    } else if c.is_ascii_uppercase() {
        LETTER_KEYS.get(c as usize - 'A' as usize).copied()
    } else {
        None
    }
}

/// Tracks modifier state across raw key events and maps each press to at
/// most one [`PagerCommand`]. The hook library delivers events serially, so
/// no synchronization is needed here.
#[derive(Debug, Default)]
pub struct KeyTracker {
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl KeyTracker {
    pub fn handle(&mut self, event: &EventType, bindings: &KeyBindings) -> Option<PagerCommand> {
        match *event {
            EventType::KeyPress(key) => {
                self.set_modifier(key, true);
                if self.matches(bindings.toggle, key) {
                    return Some(PagerCommand::ToggleOverlay);
                }
                if let Some(quit) = bindings.quit {
                    if self.matches(quit, key) {
                        return Some(PagerCommand::Quit);
                    }
                }
                if key == bindings.next {
                    return Some(PagerCommand::NextSegment);
                }
                if key == bindings.prev {
                    return Some(PagerCommand::PrevSegment);
                }
                None
            }
            EventType::KeyRelease(key) => {
                self.set_modifier(key, false);
                None
            }
            _ => None,
        }
    }

    fn set_modifier(&mut self, key: Key, down: bool) {
        match key {
            Key::ControlLeft | Key::ControlRight => self.ctrl = down,
            Key::ShiftLeft | Key::ShiftRight => self.shift = down,
            Key::Alt | Key::AltGr => self.alt = down,
            _ => {}
        }
    }

    fn matches(&self, hotkey: Hotkey, key: Key) -> bool {
        key == hotkey.key
            && (!hotkey.ctrl || self.ctrl)
            && (!hotkey.shift || self.shift)
            && (!hotkey.alt || self.alt)
    }
}
